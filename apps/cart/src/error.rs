//! # Cart Error Type
//!
//! Unified error type for cart operations and startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in a Cart Operation                       │
//! │                                                                         │
//! │  add_product(7)                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  Inner step: CartResult<Cart>                                    │   │
//! │  │       │                                                          │   │
//! │  │  Catalog error? ──── CatalogError ─────────┐                     │   │
//! │  │  No record?     ──── ProductUnavailable ───┤                     │   │
//! │  │  Invalid amount? ─── CoreError ────────────┼──► CartError        │   │
//! │  │  Write failed?  ──── StoreError ───────────┘        │            │   │
//! │  └─────────────────────────────────────────────────────┼────────────┘   │
//! │                                                        ▼                │
//! │  Operation boundary: log with tracing, then                             │
//! │  notifier.notify(CartOperation::Add.failure_message())                  │
//! │                                                                         │
//! │  The caller only ever receives the current Cart.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocket_catalog::CatalogError;
use rocket_core::{CoreError, ProductId};
use rocket_store::StoreError;
use std::fmt;
use thiserror::Error;

/// Result type alias for the inner steps of cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Anything that can make a cart operation fail.
#[derive(Debug, Error)]
pub enum CartError {
    /// Catalog could not be reached or answered garbage.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Catalog answered but has no record for the product.
    #[error("Product {0} is not in the catalog")]
    ProductUnavailable(ProductId),

    /// Catalog returned a record for a different product.
    #[error("Catalog returned product {received} for requested product {requested}")]
    ProductMismatch {
        requested: ProductId,
        received: ProductId,
    },

    /// Cart rule violated (invalid amount, overflow).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persisting the snapshot failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Cart operations, each with its own user-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
    Clear,
}

impl CartOperation {
    /// Message shown to the user when the operation fails, whatever the cause.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CartOperation::Add => "Failed to add product",
            CartOperation::Remove => "Failed to remove product",
            CartOperation::Update => "Failed to update product amount",
            CartOperation::Clear => "Failed to clear cart",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add_product"),
            CartOperation::Remove => write!(f, "remove_product"),
            CartOperation::Update => write!(f, "update_product_amount"),
            CartOperation::Clear => write!(f, "clear_cart"),
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

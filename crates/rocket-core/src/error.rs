//! # Error Types
//!
//! Domain-specific error types for rocket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocket-core errors (this file)                                        │
//! │  ├── CoreError        - Cart transition failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rocket-store errors     └── StoreError    - persistence failures      │
//! │  rocket-catalog errors   └── CatalogError  - product lookup failures   │
//! │                                                                         │
//! │  rocket-cart (app)       └── CartError     - caught at the operation   │
//! │                                              boundary, turned into a   │
//! │                                              user notification         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart transition errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The transition needs an existing line for this product.
    #[error("Product {0} is not in the cart")]
    LineNotFound(ProductId),

    /// A second line for the same product would break the one-line-per-id rule.
    ///
    /// ## When This Occurs
    /// - `append` called for a product already in the cart
    /// - A persisted blob listing the same id twice
    #[error("Product {0} already has a line in the cart")]
    DuplicateLine(ProductId),

    /// Incrementing would overflow the amount type.
    #[error("Amount for product {id} cannot exceed {max}")]
    QuantityTooLarge { id: ProductId, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must be at least one.
    #[error("{field} must be at least 1")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

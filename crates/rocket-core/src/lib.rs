//! # rocket-core: Pure Cart Logic
//!
//! This crate holds the cart state-transition rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rocket Cart Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI layer (CLI / front end)                   │   │
//! │  │      add_product, remove_product, update_product_amount        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                CartStore (rocket-cart app crate)                │   │
//! │  │   lock ──► compute next ──► commit ──► persist ──► notify      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rocket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ ProductId │  │   Money   │  │   Cart    │  │  amounts  │  │   │
//! │  │   │  Product  │  │  parsing  │  │ LineItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  rocket-store (PersistentStore)      rocket-catalog (ProductCatalog)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog-facing types (`ProductId`, `Product`)
//! - [`cart`] - `Cart`, `LineItem` and the pure transitions
//! - [`money`] - Integer money with exact decimal parsing
//! - [`error`] - Domain error types
//! - [`validation`] - Amount rules
//!
//! ## Example Usage
//!
//! ```rust
//! use rocket_core::{Cart, Money, Product, ProductId};
//!
//! let sneaker = Product {
//!     id: ProductId::new(1),
//!     name: "Tênis de Caminhada".to_string(),
//!     price: Money::from_cents(17990),
//!     image: "https://example.com/1.jpg".to_string(),
//!     stock: Some(3),
//! };
//!
//! let cart = Cart::new().append(&sneaker).unwrap();
//! let cart = cart.increment(sneaker.id).unwrap();
//!
//! assert_eq!(cart.get(sneaker.id).unwrap().amount, 2);
//! assert_eq!(cart.subtotal(), Money::from_cents(35980));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Product, ProductId};

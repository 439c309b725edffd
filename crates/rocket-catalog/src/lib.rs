//! # rocket-catalog: Product Lookup
//!
//! The cart only talks to the catalog when a product that is not yet in the
//! cart is added. Everything it needs is behind [`ProductCatalog`].
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_product(7)  (7 not in cart)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.fetch_by_id(7)                                                │
//! │       │                                                                 │
//! │       ├── Ok(Some(product)) ──► append line, persist                   │
//! │       ├── Ok(None)          ──► "Failed to add product"                │
//! │       └── Err(CatalogError) ──► "Failed to add product"                │
//! │                                                                         │
//! │  The user never sees whether it was "not found" or a network error.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod fixture;
pub mod http;
mod record;

pub use catalog::ProductCatalog;
pub use error::{CatalogError, CatalogResult};
pub use fixture::StaticCatalog;
pub use http::HttpCatalog;

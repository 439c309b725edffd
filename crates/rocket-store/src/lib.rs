//! # rocket-store: Persistent Storage for the Cart
//!
//! The cart is persisted as one serialized blob under a namespaced key, the
//! same shape as browser local storage. This crate provides the storage port
//! and its implementations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Persistence Flow                            │
//! │                                                                         │
//! │  CartStore (after committing the next snapshot)                        │
//! │       │                                                                 │
//! │       │  codec::save_cart(store, "@RocketShoes:cart", &snapshot)       │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   rocket-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    codec      │    │PersistentStore│    │  Migrations  │  │   │
//! │  │   │ Cart ⇄ JSON   │───►│  get / set    │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                        ┌───────┴────────┐                      │   │
//! │  │                        ▼                ▼                      │   │
//! │  │                  SqliteStore       MemoryStore                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/rocket-cart/cart.db  (kv_store table)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rocket_store::{codec, SqliteStore, StoreConfig, DEFAULT_CART_KEY};
//!
//! let store = SqliteStore::connect(StoreConfig::new("./cart.db")).await?;
//! let cart = codec::load_cart(&store, DEFAULT_CART_KEY).await?.unwrap_or_default();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoreConfig};
pub use store::PersistentStore;

/// Key the cart blob is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

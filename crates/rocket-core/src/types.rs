//! # Domain Types
//!
//! Catalog-facing types shared by every crate in the workspace.
//!
//! ## Product vs LineItem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐   append()    ┌─────────────────┐                  │
//! │  │    Product      │ ────────────► │    LineItem     │                  │
//! │  │  ─────────────  │  (snapshot)   │  ─────────────  │                  │
//! │  │  id             │               │  id             │                  │
//! │  │  name           │               │  name           │                  │
//! │  │  price          │               │  price          │                  │
//! │  │  image          │               │  image          │                  │
//! │  │  stock (unused) │               │  amount ≥ 1     │                  │
//! │  └─────────────────┘               └─────────────────┘                  │
//! │                                                                         │
//! │  Display attributes are frozen when the line is created.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Numeric product identity. Unique within a cart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identity.
    pub id: ProductId,

    /// Display name. Some catalogs call this `title`.
    #[serde(alias = "title")]
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Image URL shown next to the line.
    pub image: String,

    /// Units in stock, when the catalog reports it. The cart never reads it.
    #[serde(default)]
    pub stock: Option<u32>,
}

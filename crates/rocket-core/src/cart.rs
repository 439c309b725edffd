//! # Cart
//!
//! The cart value and its pure transitions.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions (all &self → new Cart)              │
//! │                                                                         │
//! │  UI action             CartStore op               Transition            │
//! │  ─────────             ────────────               ──────────            │
//! │                                                                         │
//! │  Click "add" (known) ─► add_product() ──────────► increment(id)         │
//! │                                                                         │
//! │  Click "add" (new) ───► add_product() ──fetch───► append(&product)      │
//! │                                                                         │
//! │  Change amount ───────► update_product_amount() ► with_amount(id, n)    │
//! │                                                                         │
//! │  Click remove ────────► remove_product() ───────► without(id)           │
//! │                                                                         │
//! │  NOTE: transitions never touch storage. The caller commits the          │
//! │        returned snapshot and persists exactly that snapshot.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has `amount ≥ 1`
//! - Insertion order is display order

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_amount;

/// A product line in the cart.
///
/// `name`, `price` and `image` are a frozen copy of the catalog record taken
/// when the line was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product identity.
    pub id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Units of this product in the cart. Always ≥ 1.
    pub amount: u32,
}

impl LineItem {
    /// Creates a fresh line with amount 1 from a catalog record.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            amount: 1,
        }
    }

    /// Unit price × amount.
    pub fn subtotal(&self) -> Money {
        self.price.multiply_quantity(self.amount)
    }
}

/// The shopping cart.
///
/// Fields are private so the invariants hold for every `Cart` value. Build one
/// with [`Cart::new`] or [`Cart::from_items`], then move between states with
/// the transition methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from previously stored lines, checking the invariants.
    ///
    /// ## Returns
    /// - `Err(CoreError::DuplicateLine)` if an id appears twice
    /// - `Err(CoreError::Validation)` if a line has amount 0
    pub fn from_items(items: Vec<LineItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount == 0 {
                return Err(ValidationError::MustBePositive {
                    field: format!("amount of product {}", item.id),
                }
                .into());
            }
            if !seen.insert(item.id) {
                return Err(CoreError::DuplicateLine(item.id));
            }
        }
        Ok(Cart { items })
    }

    /// Lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds one unit to an existing line. Nothing else on the line changes.
    pub fn increment(&self, id: ProductId) -> CoreResult<Cart> {
        let mut next = self.clone();
        let line = next
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::LineNotFound(id))?;

        line.amount = line
            .amount
            .checked_add(1)
            .ok_or(CoreError::QuantityTooLarge { id, max: u32::MAX })?;

        Ok(next)
    }

    /// Appends a new line with amount 1 at the end of the cart.
    pub fn append(&self, product: &Product) -> CoreResult<Cart> {
        if self.contains(product.id) {
            return Err(CoreError::DuplicateLine(product.id));
        }

        let mut next = self.clone();
        next.items.push(LineItem::from_product(product));
        Ok(next)
    }

    /// Drops the line for `id`. Removing an absent id returns an equal cart.
    pub fn without(&self, id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Sets the amount of the line for `id`.
    ///
    /// ## Behavior
    /// - `amount < 1` or larger than `u32::MAX`: validation error, no new state
    /// - Absent id: returns an equal cart
    pub fn with_amount(&self, id: ProductId, amount: i64) -> CoreResult<Cart> {
        let amount = validate_amount(amount)?;

        let mut next = self.clone();
        if let Some(line) = next.items.iter_mut().find(|item| item.id == id) {
            line.amount = amount;
        }
        Ok(next)
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Sum of all line amounts.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Sum of all line subtotals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

/// Cart totals summary for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products (the header badge count).
    pub line_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

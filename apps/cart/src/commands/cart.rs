//! # Cart Commands
//!
//! Thin wrappers over [`CartStore`] that return a display-ready view.
//!
//! ## Cart Display
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ID   PRODUCT                          QTY       PRICE     SUBTOTAL     │
//! │  1    Tênis de Caminhada Leve            2     $179.90      $359.80     │
//! │  3    Tênis Adidas Duramo Lite           1     $219.90      $219.90     │
//! │  ───────────────────────────────────────────────────────────────────    │
//! │  2 products, 3 items                            TOTAL       $579.70     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocket_core::{Cart, CartTotals, LineItem, ProductId};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

use crate::state::{AppConfig, CartStore};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub async fn get_cart(cart: &CartStore) -> CartView {
    debug!("get_cart command");
    CartView::from(&cart.cart().await)
}

/// Adds one unit of a product.
pub async fn add_to_cart(cart: &CartStore, product_id: u64) -> CartView {
    debug!(product_id, "add_to_cart command");
    CartView::from(&cart.add_product(ProductId::new(product_id)).await)
}

/// Sets the amount of a product already in the cart.
pub async fn update_cart_item(cart: &CartStore, product_id: u64, amount: i64) -> CartView {
    debug!(product_id, amount, "update_cart_item command");
    CartView::from(
        &cart
            .update_product_amount(ProductId::new(product_id), amount)
            .await,
    )
}

/// Removes a product from the cart.
pub async fn remove_from_cart(cart: &CartStore, product_id: u64) -> CartView {
    debug!(product_id, "remove_from_cart command");
    CartView::from(&cart.remove_product(ProductId::new(product_id)).await)
}

/// Empties the cart.
pub async fn clear_cart(cart: &CartStore) -> CartView {
    debug!("clear_cart command");
    CartView::from(&cart.clear_cart().await)
}

/// Renders the view as a text table.
pub fn render(view: &CartView, config: &AppConfig) -> String {
    if view.items.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<32} {:>5} {:>11} {:>12}",
        "ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL"
    );
    for line in &view.items {
        let _ = writeln!(
            out,
            "{:<4} {:<32} {:>5} {:>11} {:>12}",
            line.id.get(),
            truncate(&line.name, 32),
            line.amount,
            config.format_currency(line.price.cents()),
            config.format_currency(line.subtotal().cents()),
        );
    }
    let _ = writeln!(out, "{}", "─".repeat(68));
    let _ = writeln!(
        out,
        "{:<50} {:>5} {:>11}",
        format!(
            "{} products, {} items",
            view.totals.line_count, view.totals.total_quantity
        ),
        "TOTAL",
        config.format_currency(view.totals.subtotal.cents()),
    );
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

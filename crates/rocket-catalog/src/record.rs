//! Wire shape of a catalog product.
//!
//! Catalog APIs send prices as JSON decimals (`179.9`). The number is kept as
//! `serde_json::Number` and converted to cents from its decimal text.

use rocket_core::{Money, Product, ProductId};
use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: u64,
    #[serde(alias = "title")]
    pub name: String,
    pub price: serde_json::Number,
    pub image: String,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl ProductRecord {
    pub fn into_product(self) -> CatalogResult<Product> {
        let price = Money::parse_decimal(&self.price.to_string())
            .map_err(|e| CatalogError::Decode(format!("product {}: {}", self.id, e)))?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price,
            image: self.image,
            stock: self.stock,
        })
    }
}

//! # Fixture Catalog
//!
//! In-process catalog loaded from a JSON file in the same shape as the mock
//! API's `server.json`:
//!
//! ```text
//! {
//!   "products": [ { "id": 1, "title": "...", "price": 179.9, "image": "..." } ],
//!   "stock":    [ { "id": 1, "amount": 3 } ]
//! }
//! ```
//!
//! `stock` is optional. When present, its amount is joined onto the product
//! with the same id unless the product record already carries one.

use async_trait::async_trait;
use rocket_core::{Product, ProductId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::error::{CatalogError, CatalogResult};
use crate::record::ProductRecord;

#[derive(Debug, Deserialize)]
struct Fixture {
    products: Vec<ProductRecord>,
    #[serde(default)]
    stock: Vec<StockRecord>,
}

#[derive(Debug, Deserialize)]
struct StockRecord {
    id: u64,
    amount: u32,
}

/// Catalog backed by an in-memory product map.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<ProductId, Product>,
}

impl StaticCatalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Parses a fixture document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let fixture: Fixture =
            serde_json::from_str(json).map_err(|e| CatalogError::Fixture(e.to_string()))?;

        let stock: HashMap<u64, u32> = fixture
            .stock
            .into_iter()
            .map(|s| (s.id, s.amount))
            .collect();

        let products = fixture
            .products
            .into_iter()
            .map(|record| -> CatalogResult<Product> {
                let mut product = record.into_product()?;
                if product.stock.is_none() {
                    product.stock = stock.get(&product.id.get()).copied();
                }
                Ok(product)
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(Self::new(products))
    }

    /// Reads and parses a fixture file.
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Fixture(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json_str(&json)?;
        debug!(path = %path.display(), products = catalog.len(), "Loaded catalog fixture");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    fn source_name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.products.get(&id).cloned())
    }
}

use async_trait::async_trait;
use rocket_core::{Product, ProductId};

use crate::error::CatalogResult;

/// Pluggable product lookup.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Short name used in log lines.
    fn source_name(&self) -> &'static str;

    /// Fetches the product record for `id`.
    ///
    /// `Ok(None)` means the catalog answered but has no such product.
    async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}

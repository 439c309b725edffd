//! # HTTP Catalog
//!
//! `ProductCatalog` over a REST endpoint: `GET {base_url}/products/{id}`.
//!
//! ## Response Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP response                         fetch_by_id result               │
//! │  ─────────────                         ──────────────────               │
//! │  200 + product JSON            ──────► Ok(Some(product))                │
//! │  200 + null                    ──────► Ok(None)                         │
//! │  404                           ──────► Ok(None)                         │
//! │  other status                  ──────► Err(Status { status, url })      │
//! │  body not a product            ──────► Err(Decode)                      │
//! │  connect/reset                 ──────► Err(Request)                     │
//! │  slower than timeout           ──────► Err(Timeout)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use rocket_core::{Product, ProductId};
use std::time::Duration;
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::error::{CatalogError, CatalogResult};
use crate::record::ProductRecord;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST-backed product catalog.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a catalog client with [`DEFAULT_REQUEST_TIMEOUT`].
    pub fn new(base_url: impl Into<String>) -> CatalogResult<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a catalog client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(format!(
                "must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    fn source_name(&self) -> &'static str {
        "http"
    }

    async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let url = self.product_url(id);
        debug!(url = %url, "Fetching product");

        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            debug!(product_id = %id, "Catalog has no such product");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let record: Option<ProductRecord> = resp.json().await?;

        record.map(ProductRecord::into_product).transpose()
    }
}

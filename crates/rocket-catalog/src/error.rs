//! # Catalog Error Types

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog lookup failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Base URL is not an http(s) URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Request could not be sent or the connection dropped.
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// Request exceeded the configured timeout.
    #[error("Catalog request timed out")]
    Timeout,

    /// Catalog answered with a non-success status other than 404.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body was not a product record.
    #[error("Could not decode catalog response: {0}")]
    Decode(String),

    /// Fixture file could not be read or parsed.
    #[error("Catalog fixture error: {0}")]
    Fixture(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

//! # PersistentStore
//!
//! The storage port the cart is written through.

use async_trait::async_trait;

use crate::error::StoreResult;

/// Key-value blob storage.
///
/// Implementations can be file-backed, database-backed, or in-memory. Keys
/// are opaque strings; values are opaque text blobs.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    /// Returns the blob stored under `key`, or `None` if the key was never set.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    async fn set(&self, key: &str, blob: &str) -> StoreResult<()>;
}

//! # In-Memory Store
//!
//! A `PersistentStore` that lives only as long as the process. Used when the
//! app runs without a database path and by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::store::PersistentStore;

/// HashMap-backed key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `blob` under `key`.
    ///
    /// ## Usage
    /// ```rust
    /// use rocket_store::MemoryStore;
    ///
    /// let store = MemoryStore::seeded("@RocketShoes:cart", "[]");
    /// ```
    pub fn seeded(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), blob.into());
        MemoryStore {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl PersistentStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, blob: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

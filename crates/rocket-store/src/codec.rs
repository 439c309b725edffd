//! # Cart Codec
//!
//! Converts a `Cart` to and from the persisted blob.
//!
//! ## Blob Format
//! ```json
//! [
//!   { "id": 1, "name": "Tênis de Caminhada", "price": 17990, "image": "https://…", "amount": 2 },
//!   { "id": 3, "name": "Tênis Runner",       "price": 13990, "image": "https://…", "amount": 1 }
//! ]
//! ```
//! A JSON array in display order, `price` in cents. Decoding re-checks the
//! cart invariants, so a blob listing an id twice or an amount of 0 is
//! reported as [`StoreError::Malformed`].

use rocket_core::{Cart, LineItem};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::PersistentStore;

/// Serializes a cart into its blob form.
pub fn encode_cart(cart: &Cart) -> StoreResult<String> {
    serde_json::to_string(cart.items()).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Parses a blob back into a cart.
pub fn decode_cart(blob: &str) -> StoreResult<Cart> {
    let items: Vec<LineItem> =
        serde_json::from_str(blob).map_err(|e| StoreError::Malformed(e.to_string()))?;
    Ok(Cart::from_items(items)?)
}

/// Reads and decodes the cart stored under `key`.
///
/// ## Returns
/// * `Ok(None)` - nothing stored under the key
/// * `Ok(Some(cart))` - decoded cart
/// * `Err(StoreError::Malformed)` - blob present but not a valid cart
pub async fn load_cart<S>(store: &S, key: &str) -> StoreResult<Option<Cart>>
where
    S: PersistentStore + ?Sized,
{
    match store.get(key).await? {
        Some(blob) => decode_cart(&blob).map(Some),
        None => {
            debug!(key = %key, "No stored cart");
            Ok(None)
        }
    }
}

/// Encodes `snapshot` and writes it under `key`.
///
/// The caller passes the snapshot it just committed; this function never
/// reads cart state on its own.
pub async fn save_cart<S>(store: &S, key: &str, snapshot: &Cart) -> StoreResult<()>
where
    S: PersistentStore + ?Sized,
{
    let blob = encode_cart(snapshot)?;
    store.set(key, &blob).await
}

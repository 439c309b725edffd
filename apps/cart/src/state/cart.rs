//! # Cart State
//!
//! Owns the current shopping cart and keeps the stored copy in step with it.
//!
//! ## Thread Safety
//! The cart sits behind a `tokio::sync::Mutex` that each operation holds for
//! its whole read-modify-persist cycle, including the catalog call. Two
//! concurrent `add_product(7)` calls therefore produce one line with amount 2,
//! never two lines or a lost increment.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                                 │
//! │                                                                         │
//! │  lock ──► compute next Cart ──► commit ──► persist(&snapshot) ──► unlock│
//! │                  │                               │                      │
//! │                  │ Err                           │ Err                  │
//! │                  ▼                               ▼                      │
//! │        notify, cart untouched,         notify, cart keeps the           │
//! │        nothing written                 committed state                  │
//! │                                                                         │
//! │  add_product(id)            in cart?  ── yes ──► increment amount       │
//! │                                       ── no ───► catalog.fetch_by_id    │
//! │                                                  append amount = 1      │
//! │  remove_product(id)         drop the line (absent id: no-op)            │
//! │  update_product_amount      amount ≥ 1, then set (absent id: no-op)     │
//! │  clear_cart                 empty cart                                  │
//! │                                                                         │
//! │  Every operation returns the cart as it stands afterwards.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use rocket_catalog::ProductCatalog;
use rocket_core::{Cart, CartTotals, ProductId};
use rocket_store::codec::{load_cart, save_cart};
use rocket_store::{PersistentStore, StoreError, StoreResult};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::{CartError, CartOperation, CartResult};
use crate::state::notify::Notifier;

/// The shopping cart and its collaborators.
pub struct CartStore {
    cart: Mutex<Cart>,
    catalog: Arc<dyn ProductCatalog>,
    store: Arc<dyn PersistentStore>,
    notifier: Arc<dyn Notifier>,
    key: String,
}

impl CartStore {
    /// Restores the cart stored under `key`.
    ///
    /// ## Behavior
    /// - Nothing stored: empty cart
    /// - Stored blob malformed: empty cart, warning logged
    /// - The read itself fails: error, so a blob that may still be valid is
    ///   not overwritten by the next operation
    pub async fn load(
        catalog: Arc<dyn ProductCatalog>,
        store: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
        key: impl Into<String>,
    ) -> StoreResult<Self> {
        let key = key.into();

        let cart = match load_cart(store.as_ref(), &key).await {
            Ok(Some(cart)) => {
                info!(key = %key, lines = cart.len(), "Restored stored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(StoreError::Malformed(e)) => {
                warn!(key = %key, error = %e, "Ignoring malformed stored cart");
                Cart::new()
            }
            Err(e) => {
                error!(key = %key, error = %e, "Reading stored cart failed");
                return Err(e);
            }
        };

        Ok(CartStore {
            cart: Mutex::new(cart),
            catalog,
            store,
            notifier,
            key,
        })
    }

    /// Returns a snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Returns totals for the current cart.
    pub async fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.cart.lock().await)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds one unit of `product_id`.
    ///
    /// A product already in the cart is incremented without asking the
    /// catalog. A new product is fetched and appended with amount 1.
    pub async fn add_product(&self, product_id: ProductId) -> Cart {
        debug!(product_id = %product_id, "add_product");
        let mut cart = self.cart.lock().await;
        let next = self.with_product_added(&cart, product_id).await;
        self.commit(&mut cart, next, CartOperation::Add, Some(product_id))
            .await
    }

    /// Removes the line for `product_id`, if any.
    pub async fn remove_product(&self, product_id: ProductId) -> Cart {
        debug!(product_id = %product_id, "remove_product");
        let mut cart = self.cart.lock().await;
        let next = Ok(cart.without(product_id));
        self.commit(&mut cart, next, CartOperation::Remove, Some(product_id))
            .await
    }

    /// Sets the amount for `product_id`. Amounts below 1 are rejected.
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) -> Cart {
        debug!(product_id = %product_id, amount, "update_product_amount");
        let mut cart = self.cart.lock().await;
        let next = cart.with_amount(product_id, amount).map_err(CartError::from);
        self.commit(&mut cart, next, CartOperation::Update, Some(product_id))
            .await
    }

    /// Empties the cart.
    pub async fn clear_cart(&self) -> Cart {
        debug!("clear_cart");
        let mut cart = self.cart.lock().await;
        self.commit(&mut cart, Ok(Cart::new()), CartOperation::Clear, None)
            .await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn with_product_added(&self, cart: &Cart, product_id: ProductId) -> CartResult<Cart> {
        if cart.contains(product_id) {
            return Ok(cart.increment(product_id)?);
        }

        let product = self
            .catalog
            .fetch_by_id(product_id)
            .await?
            .ok_or(CartError::ProductUnavailable(product_id))?;

        if product.id != product_id {
            return Err(CartError::ProductMismatch {
                requested: product_id,
                received: product.id,
            });
        }

        debug!(
            product_id = %product_id,
            source = self.catalog.source_name(),
            "Fetched product"
        );
        Ok(cart.append(&product)?)
    }

    /// Installs `next` and persists it.
    ///
    /// A failed computation leaves `cart` untouched and writes nothing. A
    /// failed write keeps the committed state in memory.
    async fn commit(
        &self,
        cart: &mut Cart,
        next: CartResult<Cart>,
        operation: CartOperation,
        product_id: Option<ProductId>,
    ) -> Cart {
        match next {
            Ok(next) => *cart = next,
            Err(e) => {
                self.report(operation, product_id, &e);
                return cart.clone();
            }
        }

        if let Err(e) = self.persist(cart).await {
            self.report(operation, product_id, &CartError::from(e));
        }
        cart.clone()
    }

    async fn persist(&self, snapshot: &Cart) -> StoreResult<()> {
        save_cart(self.store.as_ref(), &self.key, snapshot).await
    }

    fn report(&self, operation: CartOperation, product_id: Option<ProductId>, err: &CartError) {
        match err {
            CartError::Store(_) => {
                error!(%operation, product_id = ?product_id, error = %err, "Persisting cart failed")
            }
            _ => warn!(%operation, product_id = ?product_id, error = %err, "Cart operation failed"),
        }
        self.notifier.notify(operation.failure_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rocket_catalog::{CatalogError, CatalogResult, StaticCatalog};
    use rocket_core::{LineItem, Money, Product};
    use rocket_store::codec::decode_cart;
    use rocket_store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    const KEY: &str = "@RocketShoes:cart";

    // -------------------------------------------------------------------------
    // Test doubles
    // -------------------------------------------------------------------------

    #[derive(Default)]
    struct RecordingNotifier {
        messages: StdMutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    /// Static catalog that counts lookups and yields mid-fetch.
    struct CountingCatalog {
        inner: StaticCatalog,
        calls: AtomicUsize,
    }

    impl CountingCatalog {
        fn new(products: Vec<Product>) -> Self {
            CountingCatalog {
                inner: StaticCatalog::new(products),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductCatalog for CountingCatalog {
        fn source_name(&self) -> &'static str {
            "counting"
        }

        async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.inner.fetch_by_id(id).await
        }
    }

    struct FailingCatalog;

    #[async_trait]
    impl ProductCatalog for FailingCatalog {
        fn source_name(&self) -> &'static str {
            "failing"
        }

        async fn fetch_by_id(&self, _id: ProductId) -> CatalogResult<Option<Product>> {
            Err(CatalogError::Timeout)
        }
    }

    /// Answers every lookup with product 99.
    struct WrongIdCatalog;

    #[async_trait]
    impl ProductCatalog for WrongIdCatalog {
        fn source_name(&self) -> &'static str {
            "wrong-id"
        }

        async fn fetch_by_id(&self, _id: ProductId) -> CatalogResult<Option<Product>> {
            Ok(Some(sneaker(99, 100)))
        }
    }

    /// Reads from a seeded memory store, refuses every write.
    struct FailingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
    }

    impl FailingStore {
        fn seeded(cart: &Cart) -> Self {
            FailingStore {
                inner: MemoryStore::seeded(KEY, rocket_store::codec::encode_cart(cart).unwrap()),
                writes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PersistentStore for FailingStore {
        async fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, _key: &str, _blob: &str) -> StoreResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::QueryFailed("disk full".into()))
        }
    }

    /// Every read and write fails as if the database were gone.
    struct UnreachableStore;

    #[async_trait]
    impl PersistentStore for UnreachableStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::ConnectionFailed("database is locked".into()))
        }

        async fn set(&self, _key: &str, _blob: &str) -> StoreResult<()> {
            Err(StoreError::ConnectionFailed("database is locked".into()))
        }
    }

    // -------------------------------------------------------------------------
    // Fixtures
    // -------------------------------------------------------------------------

    fn sneaker(id: u64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Sneaker {id}"),
            price: Money::from_cents(cents),
            image: format!("https://cdn.example.com/{id}.jpg"),
            stock: Some(5),
        }
    }

    fn catalog() -> Arc<CountingCatalog> {
        Arc::new(CountingCatalog::new(vec![
            sneaker(1, 17990),
            sneaker(2, 13990),
            sneaker(3, 22990),
        ]))
    }

    fn cart_of(products: &[(Product, u32)]) -> Cart {
        let items = products
            .iter()
            .map(|(p, amount)| LineItem {
                amount: *amount,
                ..LineItem::from_product(p)
            })
            .collect();
        Cart::from_items(items).unwrap()
    }

    struct Harness {
        cart: CartStore,
        catalog: Arc<CountingCatalog>,
        store: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
    }

    impl Harness {
        async fn new(initial: Option<&Cart>) -> Self {
            let catalog = catalog();
            let store = Arc::new(match initial {
                Some(cart) => {
                    MemoryStore::seeded(KEY, rocket_store::codec::encode_cart(cart).unwrap())
                }
                None => MemoryStore::new(),
            });
            let notifier = Arc::new(RecordingNotifier::default());
            let cart = CartStore::load(
                catalog.clone(),
                store.clone(),
                notifier.clone(),
                KEY,
            )
            .await
            .unwrap();
            Harness {
                cart,
                catalog,
                store,
                notifier,
            }
        }

        async fn stored(&self) -> Option<Cart> {
            self.store
                .get(KEY)
                .await
                .unwrap()
                .map(|blob| decode_cart(&blob).unwrap())
        }
    }

    // -------------------------------------------------------------------------
    // Initialization
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_starts_empty_without_stored_cart() {
        let h = Harness::new(None).await;
        assert!(h.cart.cart().await.is_empty());
        assert!(h.stored().await.is_none());
    }

    #[tokio::test]
    async fn test_restores_stored_cart() {
        let stored = cart_of(&[(sneaker(1, 17990), 2), (sneaker(3, 22990), 1)]);
        let h = Harness::new(Some(&stored)).await;
        assert_eq!(h.cart.cart().await, stored);
    }

    #[tokio::test]
    async fn test_malformed_blob_starts_empty() {
        let store = Arc::new(MemoryStore::seeded(KEY, "{not json"));
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(catalog(), store, notifier.clone(), KEY)
            .await
            .unwrap();

        assert!(cart.cart().await.is_empty());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_failed_read_is_an_error_not_an_empty_cart() {
        let notifier = Arc::new(RecordingNotifier::default());
        let result = CartStore::load(
            catalog(),
            Arc::new(UnreachableStore),
            notifier.clone(),
            KEY,
        )
        .await;

        assert!(matches!(result, Err(StoreError::ConnectionFailed(_))));
        assert!(notifier.messages().is_empty());
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_new_product_appends_fetched_line() {
        let h = Harness::new(None).await;

        let cart = h.cart.add_product(ProductId::new(2)).await;

        assert_eq!(cart.len(), 1);
        let line = cart.get(ProductId::new(2)).unwrap();
        assert_eq!(line.amount, 1);
        assert_eq!(line.name, "Sneaker 2");
        assert_eq!(line.price, Money::from_cents(13990));
        assert_eq!(line.image, "https://cdn.example.com/2.jpg");
        assert_eq!(h.catalog.calls(), 1);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_add_persists_post_mutation_snapshot() {
        let h = Harness::new(None).await;

        let cart = h.cart.add_product(ProductId::new(1)).await;

        assert_eq!(h.stored().await, Some(cart));
    }

    #[tokio::test]
    async fn test_add_existing_product_increments_without_catalog() {
        let stored = cart_of(&[(sneaker(1, 17990), 1), (sneaker(2, 13990), 4)]);
        let h = Harness::new(Some(&stored)).await;

        let cart = h.cart.add_product(ProductId::new(2)).await;

        assert_eq!(h.catalog.calls(), 0);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().amount, 5);
        assert_eq!(cart.get(ProductId::new(1)), stored.get(ProductId::new(1)));
        assert_eq!(h.stored().await, Some(cart));
    }

    #[tokio::test]
    async fn test_add_unknown_product_notifies_once_and_writes_nothing() {
        let h = Harness::new(None).await;

        let cart = h.cart.add_product(ProductId::new(42)).await;

        assert!(cart.is_empty());
        assert_eq!(h.notifier.messages(), vec!["Failed to add product"]);
        assert!(h.stored().await.is_none());
    }

    #[tokio::test]
    async fn test_add_with_catalog_failure_leaves_cart_unchanged() {
        let stored = cart_of(&[(sneaker(1, 17990), 2)]);
        let store = Arc::new(MemoryStore::seeded(
            KEY,
            rocket_store::codec::encode_cart(&stored).unwrap(),
        ));
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(Arc::new(FailingCatalog), store, notifier.clone(), KEY)
            .await
            .unwrap();

        let after = cart.add_product(ProductId::new(3)).await;

        assert_eq!(after, stored);
        assert_eq!(notifier.messages(), vec!["Failed to add product"]);
    }

    #[tokio::test]
    async fn test_add_rejects_record_for_another_product() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(Arc::new(WrongIdCatalog), store.clone(), notifier.clone(), KEY)
            .await
            .unwrap();

        let after = cart.add_product(ProductId::new(5)).await;

        assert!(after.is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to add product"]);
        assert!(store.get(KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_adds_of_new_product_make_one_line() {
        let h = Arc::new(Harness::new(None).await);

        let a = {
            let h = h.clone();
            tokio::spawn(async move { h.cart.add_product(ProductId::new(3)).await })
        };
        let b = {
            let h = h.clone();
            tokio::spawn(async move { h.cart.add_product(ProductId::new(3)).await })
        };
        a.await.unwrap();
        b.await.unwrap();

        let cart = h.cart.cart().await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(3)).unwrap().amount, 2);
        assert_eq!(h.catalog.calls(), 1);
        assert_eq!(h.stored().await, Some(cart));
    }

    #[tokio::test]
    async fn test_add_write_failure_keeps_line_and_notifies() {
        let store = Arc::new(FailingStore::seeded(&Cart::new()));
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(catalog(), store.clone(), notifier.clone(), KEY)
            .await
            .unwrap();

        let after = cart.add_product(ProductId::new(2)).await;

        assert_eq!(after.get(ProductId::new(2)).unwrap().amount, 1);
        assert_eq!(cart.cart().await, after);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.messages(), vec!["Failed to add product"]);
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_remove_keeps_order_of_remaining_lines() {
        let stored = cart_of(&[
            (sneaker(1, 17990), 1),
            (sneaker(2, 13990), 2),
            (sneaker(3, 22990), 3),
        ]);
        let h = Harness::new(Some(&stored)).await;

        let cart = h.cart.remove_product(ProductId::new(2)).await;

        let ids: Vec<u64> = cart.items().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(cart.get(ProductId::new(3)).unwrap().amount, 3);
        assert_eq!(h.stored().await, Some(cart));
    }

    #[tokio::test]
    async fn test_remove_absent_product_is_silent_noop() {
        let stored = cart_of(&[(sneaker(1, 17990), 1)]);
        let h = Harness::new(Some(&stored)).await;

        let cart = h.cart.remove_product(ProductId::new(9)).await;

        assert_eq!(cart, stored);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_remove_write_failure_keeps_removal_and_notifies() {
        let stored = cart_of(&[(sneaker(1, 17990), 1), (sneaker(2, 13990), 1)]);
        let store = Arc::new(FailingStore::seeded(&stored));
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(catalog(), store.clone(), notifier.clone(), KEY)
            .await
            .unwrap();

        let after = cart.remove_product(ProductId::new(1)).await;

        assert!(!after.contains(ProductId::new(1)));
        assert_eq!(cart.cart().await, after);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.messages(), vec!["Failed to remove product"]);
    }

    // -------------------------------------------------------------------------
    // update_product_amount
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_sets_exact_amount() {
        let stored = cart_of(&[(sneaker(1, 17990), 1), (sneaker(2, 13990), 1)]);
        let h = Harness::new(Some(&stored)).await;

        let cart = h.cart.update_product_amount(ProductId::new(2), 7).await;

        assert_eq!(cart.get(ProductId::new(2)).unwrap().amount, 7);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
        assert_eq!(h.stored().await, Some(cart));
    }

    #[tokio::test]
    async fn test_update_to_zero_or_negative_is_rejected() {
        let stored = cart_of(&[(sneaker(1, 17990), 3)]);
        let h = Harness::new(Some(&stored)).await;

        let after_zero = h.cart.update_product_amount(ProductId::new(1), 0).await;
        let after_negative = h.cart.update_product_amount(ProductId::new(1), -2).await;

        assert_eq!(after_zero, stored);
        assert_eq!(after_negative, stored);
        assert_eq!(
            h.notifier.messages(),
            vec![
                "Failed to update product amount",
                "Failed to update product amount"
            ]
        );
        // Seeded blob untouched.
        assert_eq!(h.stored().await, Some(stored));
    }

    #[tokio::test]
    async fn test_update_above_line_maximum_is_rejected() {
        let stored = cart_of(&[(sneaker(1, 17990), 3)]);
        let h = Harness::new(Some(&stored)).await;

        let after = h
            .cart
            .update_product_amount(ProductId::new(1), i64::from(u32::MAX) + 1)
            .await;

        assert_eq!(after, stored);
        assert_eq!(h.notifier.messages(), vec!["Failed to update product amount"]);
        assert_eq!(h.stored().await, Some(stored));
    }

    #[tokio::test]
    async fn test_update_write_failure_keeps_amount_and_notifies() {
        let stored = cart_of(&[(sneaker(1, 17990), 1), (sneaker(2, 13990), 1)]);
        let store = Arc::new(FailingStore::seeded(&stored));
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(catalog(), store.clone(), notifier.clone(), KEY)
            .await
            .unwrap();

        let after = cart.update_product_amount(ProductId::new(1), 6).await;

        assert_eq!(after.get(ProductId::new(1)).unwrap().amount, 6);
        assert_eq!(cart.cart().await, after);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert_eq!(
            notifier.messages(),
            vec!["Failed to update product amount"]
        );
    }

    #[tokio::test]
    async fn test_update_absent_product_is_silent_noop() {
        let h = Harness::new(None).await;

        let cart = h.cart.update_product_amount(ProductId::new(1), 4).await;

        assert!(cart.is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    // -------------------------------------------------------------------------
    // clear_cart / totals
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_clear_empties_and_persists() {
        let stored = cart_of(&[(sneaker(1, 17990), 2)]);
        let h = Harness::new(Some(&stored)).await;

        let cart = h.cart.clear_cart().await;

        assert!(cart.is_empty());
        assert_eq!(h.stored().await, Some(Cart::new()));
    }

    #[tokio::test]
    async fn test_clear_write_failure_notifies() {
        let stored = cart_of(&[(sneaker(1, 17990), 2)]);
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(
            catalog(),
            Arc::new(FailingStore::seeded(&stored)),
            notifier.clone(),
            KEY,
        )
        .await
        .unwrap();

        assert!(cart.clear_cart().await.is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to clear cart"]);
    }

    #[tokio::test]
    async fn test_totals_follow_current_cart() {
        let stored = cart_of(&[(sneaker(1, 17990), 2), (sneaker(2, 13990), 1)]);
        let h = Harness::new(Some(&stored)).await;

        let totals = h.cart.totals().await;

        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal, Money::from_cents(49970));
    }
}

//! # In-Memory Cart Repository
//!
//! Reference implementation of [`CartRepository`] over a `HashMap`.
//!
//! Persistence engine design is out of scope for this workspace; this store
//! exists so the orchestrator, demo binary, and tests can run against the
//! real contract without a database.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::{CartRepository, StoreError, StoreResult};
use quickcart_core::Cart;

/// Cart store backed by an in-process map.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InMemoryCartRepository::new();
/// let cart = repo.create(cart).await?;
/// let found = repo.find_by_id(&cart.id).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCartRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryCartRepository {
            carts: RwLock::new(HashMap::new()),
        }
    }
}

impl CartRepository for InMemoryCartRepository {
    async fn create(&self, cart: Cart) -> StoreResult<Cart> {
        debug!(cart_id = %cart.id, "Storing new cart");

        let mut carts = self.carts.write().await;
        carts.insert(cart.id.clone(), cart.clone());
        Ok(cart)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.get(id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.values().cloned().collect())
    }

    async fn update(&self, id: &str, cart: Cart) -> StoreResult<()> {
        debug!(cart_id = %id, "Updating cart");

        let mut carts = self.carts.write().await;
        if !carts.contains_key(id) {
            return Err(StoreError::not_found("Cart", id));
        }
        carts.insert(id.to_string(), cart);
        Ok(())
    }

    async fn remove(&self, id: &str) -> StoreResult<()> {
        debug!(cart_id = %id, "Removing cart");

        let mut carts = self.carts.write().await;
        carts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Cart", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcart_core::{CustomerTier, ShippingMethod};

    fn test_cart() -> Cart {
        Cart::new(
            "customer-1",
            CustomerTier::Standard,
            ShippingMethod::Standard,
            None,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryCartRepository::new();
        let cart = repo.create(test_cart()).await.unwrap();

        let found = repo.find_by_id(&cart.id).await.unwrap();
        assert_eq!(found, Some(cart));
    }

    #[tokio::test]
    async fn test_find_absent_returns_none() {
        let repo = InMemoryCartRepository::new();
        let found = repo.find_by_id("missing").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all() {
        let repo = InMemoryCartRepository::new();
        repo.create(test_cart()).await.unwrap();
        repo.create(test_cart()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_stored_cart() {
        let repo = InMemoryCartRepository::new();
        let mut cart = repo.create(test_cart()).await.unwrap();

        cart.customer_tier = CustomerTier::Premium;
        repo.update(&cart.id, cart.clone()).await.unwrap();

        let found = repo.find_by_id(&cart.id).await.unwrap().unwrap();
        assert_eq!(found.customer_tier, CustomerTier::Premium);
    }

    #[tokio::test]
    async fn test_update_absent_fails() {
        let repo = InMemoryCartRepository::new();
        let err = repo.update("missing", test_cart()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = InMemoryCartRepository::new();
        let cart = repo.create(test_cart()).await.unwrap();

        repo.remove(&cart.id).await.unwrap();
        assert!(repo.find_by_id(&cart.id).await.unwrap().is_none());

        let err = repo.remove(&cart.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}

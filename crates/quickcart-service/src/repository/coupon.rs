//! # In-Memory Coupon Repository
//!
//! Reference implementation of [`CouponRepository`] over a `HashMap`.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::{CouponRepository, StoreError, StoreResult};
use quickcart_core::Coupon;

/// Coupon store backed by an in-process map.
#[derive(Debug, Default)]
pub struct InMemoryCouponRepository {
    coupons: RwLock<HashMap<String, Coupon>>,
}

impl InMemoryCouponRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryCouponRepository {
            coupons: RwLock::new(HashMap::new()),
        }
    }
}

impl CouponRepository for InMemoryCouponRepository {
    async fn create(&self, coupon: Coupon) -> StoreResult<Coupon> {
        debug!(coupon_id = %coupon.id, "Storing new coupon");

        let mut coupons = self.coupons.write().await;
        coupons.insert(coupon.id.clone(), coupon.clone());
        Ok(coupon)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Coupon>> {
        let coupons = self.coupons.read().await;
        Ok(coupons.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        debug!(coupon_id = %id, "Deleting coupon");

        let mut coupons = self.coupons.write().await;
        coupons
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Coupon", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use quickcart_core::CouponType;

    fn test_coupon() -> Coupon {
        Coupon::new(CouponType::Amount, 1500, Utc::now() + Duration::days(1))
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryCouponRepository::new();
        let coupon = repo.create(test_coupon()).await.unwrap();

        let found = repo.find_by_id(&coupon.id).await.unwrap();
        assert_eq!(found, Some(coupon));
    }

    #[tokio::test]
    async fn test_find_absent_returns_none() {
        let repo = InMemoryCouponRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryCouponRepository::new();
        let coupon = repo.create(test_coupon()).await.unwrap();

        repo.delete_by_id(&coupon.id).await.unwrap();
        assert!(repo.find_by_id(&coupon.id).await.unwrap().is_none());

        let err = repo.delete_by_id(&coupon.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}

//! # Coupon Service
//!
//! CRUD surface for coupons, fronting the coupon repository for the
//! transport layer.
//!
//! Creation does not judge the coupon's value sign or expiration; the
//! coupon engine is the single authority for validity at redemption time.
//! A merchant may legitimately stage a coupon that is already expired or
//! worthless; it simply never redeems.

use tracing::debug;

use crate::dto::{CouponDto, CreateCouponRequest};
use crate::error::ApiError;
use crate::repository::CouponRepository;
use quickcart_core::Coupon;

/// Manages the coupon catalog.
pub struct CouponService<K: CouponRepository> {
    coupons: K,
}

impl<K: CouponRepository> CouponService<K> {
    /// Creates a service over the given repository.
    pub fn new(coupons: K) -> Self {
        CouponService { coupons }
    }

    /// Creates a coupon with a fresh identifier.
    pub async fn create(&self, request: CreateCouponRequest) -> Result<CouponDto, ApiError> {
        debug!(coupon_type = ?request.coupon_type, value = request.value, "create coupon");

        let coupon = Coupon::new(request.coupon_type, request.value, request.expiration);
        let coupon = self.coupons.create(coupon).await?;
        Ok(CouponDto::from(&coupon))
    }

    /// Returns the coupon with the given id.
    pub async fn get(&self, coupon_id: &str) -> Result<CouponDto, ApiError> {
        debug!(coupon_id = %coupon_id, "get coupon");

        let coupon = self
            .coupons
            .find_by_id(coupon_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Coupon", coupon_id))?;
        Ok(CouponDto::from(&coupon))
    }

    /// Deletes a coupon.
    pub async fn delete(&self, coupon_id: &str) -> Result<(), ApiError> {
        debug!(coupon_id = %coupon_id, "delete coupon");

        self.coupons.delete_by_id(coupon_id).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::repository::InMemoryCouponRepository;
    use chrono::{Duration, Utc};
    use quickcart_core::CouponType;

    fn test_service() -> CouponService<InMemoryCouponRepository> {
        CouponService::new(InMemoryCouponRepository::new())
    }

    fn test_request(value: i64) -> CreateCouponRequest {
        CreateCouponRequest {
            coupon_type: CouponType::Amount,
            value,
            expiration: Utc::now() + Duration::days(1),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_persists() {
        let service = test_service();
        let dto = service.create(test_request(1500)).await.unwrap();

        assert!(!dto.id.is_empty());
        let found = service.get(&dto.id).await.unwrap();
        assert_eq!(found, dto);
    }

    #[tokio::test]
    async fn test_creation_does_not_judge_value() {
        // The coupon engine rejects this at redemption; staging it is fine
        let service = test_service();
        let dto = service.create(test_request(-5)).await.unwrap();
        assert_eq!(dto.value, -5);
    }

    #[tokio::test]
    async fn test_get_unknown_coupon_is_not_found() {
        let service = test_service();
        let err = service.get("missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_coupon() {
        let service = test_service();
        let dto = service.create(test_request(1500)).await.unwrap();

        service.delete(&dto.id).await.unwrap();

        let err = service.get(&dto.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = service.delete(&dto.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}

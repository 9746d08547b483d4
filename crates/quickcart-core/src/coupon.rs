//! # Coupon Engine
//!
//! Validates a coupon against a checkout summary and computes the discount
//! it grants.
//!
//! ## Redemption Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value < 0                  → invalid coupon                            │
//! │  expiration < now           → invalid coupon (now via injected Clock)   │
//! │  Amount coupon              → discount = value (cents), uncapped        │
//! │  Percentage coupon          → discount = total × value bps / 10000      │
//! │                                                                         │
//! │  The discount applies to the post-customer-discount total and is        │
//! │  never compounded with itself.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An Amount coupon larger than the total is NOT clamped; the resulting
//! negative total is the caller's business decision to handle.

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountRate, Money};
use crate::types::{CheckoutSummary, Coupon, CouponType};

/// Computes the discount a coupon grants against a checkout summary.
///
/// A trait so that the orchestrator can be exercised against a fake engine
/// returning canned discounts.
pub trait CouponEngine: Send + Sync {
    /// Validates the coupon and returns its discount amount.
    ///
    /// Fails with `InvalidCoupon` when the value is negative or the coupon
    /// expired before the current time.
    fn calculate_discount(&self, summary: &CheckoutSummary, coupon: &Coupon) -> CoreResult<Money>;
}

/// The production coupon engine, generic over its time source.
#[derive(Debug, Clone)]
pub struct CouponCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl CouponCalculator<SystemClock> {
    /// Creates an engine reading the system wall clock.
    pub fn new() -> Self {
        CouponCalculator { clock: SystemClock }
    }
}

impl Default for CouponCalculator<SystemClock> {
    fn default() -> Self {
        CouponCalculator::new()
    }
}

impl<C: Clock> CouponCalculator<C> {
    /// Creates an engine with an explicit clock. Tests pin this to a
    /// `FixedClock`.
    pub fn with_clock(clock: C) -> Self {
        CouponCalculator { clock }
    }
}

impl<C: Clock> CouponEngine for CouponCalculator<C> {
    fn calculate_discount(&self, summary: &CheckoutSummary, coupon: &Coupon) -> CoreResult<Money> {
        if coupon.value < 0 {
            return Err(CoreError::invalid_coupon("value is negative"));
        }

        if coupon.expiration < self.clock.now() {
            return Err(CoreError::invalid_coupon(format!(
                "expired at {}",
                coupon.expiration
            )));
        }

        match coupon.coupon_type {
            CouponType::Amount => Ok(Money::from_cents(coupon.value)),
            CouponType::Percentage => {
                // Non-negative at this point; only absurd rates overflow u32
                let bps = u32::try_from(coupon.value)
                    .map_err(|_| CoreError::invalid_coupon("percentage value out of range"))?;
                Ok(summary.total().discount_amount(DiscountRate::from_bps(bps)))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, TimeZone, Utc};

    fn test_now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn test_engine() -> CouponCalculator<FixedClock> {
        CouponCalculator::with_clock(FixedClock::at(test_now()))
    }

    fn test_summary(total_cents: i64) -> CheckoutSummary {
        CheckoutSummary {
            cart_id: "cart-1".to_string(),
            item_cost_cents: total_cents - 1000,
            shipping_cents: 1000,
            customer_discount_bps: 0,
            total_cents,
        }
    }

    fn test_coupon(coupon_type: CouponType, value: i64) -> Coupon {
        Coupon::new(coupon_type, value, test_now() + Duration::days(1))
    }

    #[test]
    fn test_amount_coupon_discounts_fixed_value() {
        let engine = test_engine();
        let summary = test_summary(10000);
        let coupon = test_coupon(CouponType::Amount, 1500);

        let discount = engine.calculate_discount(&summary, &coupon).unwrap();
        assert_eq!(discount.cents(), 1500);
    }

    #[test]
    fn test_percentage_coupon_discounts_share_of_total() {
        let engine = test_engine();
        let summary = test_summary(10000);
        let coupon = test_coupon(CouponType::Percentage, 1000); // 10%

        let discount = engine.calculate_discount(&summary, &coupon).unwrap();
        assert_eq!(discount.cents(), 1000);
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let engine = test_engine();
        let summary = test_summary(10000);

        for coupon_type in [CouponType::Amount, CouponType::Percentage] {
            let coupon = test_coupon(coupon_type, -5);
            let err = engine.calculate_discount(&summary, &coupon).unwrap_err();
            assert!(matches!(err, CoreError::InvalidCoupon { .. }));
        }
    }

    #[test]
    fn test_expired_coupon_is_rejected() {
        let engine = test_engine();
        let summary = test_summary(10000);

        let coupon = Coupon::new(CouponType::Amount, 500, test_now() - Duration::seconds(1));
        let err = engine.calculate_discount(&summary, &coupon).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCoupon { .. }));
    }

    #[test]
    fn test_coupon_expiring_exactly_now_is_still_valid() {
        // Expiration strictly before now fails; equal to now passes
        let engine = test_engine();
        let summary = test_summary(10000);

        let coupon = Coupon::new(CouponType::Amount, 500, test_now());
        let discount = engine.calculate_discount(&summary, &coupon).unwrap();
        assert_eq!(discount.cents(), 500);
    }

    #[test]
    fn test_amount_coupon_is_not_capped_at_total() {
        let engine = test_engine();
        let summary = test_summary(1000);
        let coupon = test_coupon(CouponType::Amount, 2500);

        let discount = engine.calculate_discount(&summary, &coupon).unwrap();
        assert_eq!(discount.cents(), 2500); // Larger than the total
    }

    #[test]
    fn test_zero_value_coupon_discounts_nothing() {
        let engine = test_engine();
        let summary = test_summary(10000);

        for coupon_type in [CouponType::Amount, CouponType::Percentage] {
            let coupon = test_coupon(coupon_type, 0);
            let discount = engine.calculate_discount(&summary, &coupon).unwrap();
            assert!(discount.is_zero());
        }
    }
}

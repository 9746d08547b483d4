//! # Checkout Engine
//!
//! Turns a cart into a [`CheckoutSummary`]: item cost, shipping cost, and
//! the customer-tier discount folded into a pre-coupon total.
//!
//! ## Pipeline Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartManager ──► CheckoutEngine ──► ShippingCalculator                  │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │                 CheckoutSummary ──► CouponEngine (optional)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::shipping::ShippingCalculator;
use crate::types::{Cart, CheckoutSummary};

/// Computes pre-coupon totals for a cart.
///
/// A trait so that the orchestrator can be exercised against a fake engine
/// returning canned summaries.
pub trait CheckoutEngine: Send + Sync {
    /// Calculates item cost, shipping cost, customer discount, and total.
    ///
    /// Fails with `MissingShippingAddress` if the cart has no destination,
    /// before any cost computation runs.
    fn calculate_totals(&self, cart: &Cart) -> CoreResult<CheckoutSummary>;
}

/// The production checkout engine.
///
/// Pure function of cart state and shipping calculator output; no side
/// effects.
#[derive(Debug, Clone)]
pub struct CheckoutCalculator {
    shipping: ShippingCalculator,
}

impl CheckoutCalculator {
    /// Creates an engine that prices shipping with the given calculator.
    pub fn new(shipping: ShippingCalculator) -> Self {
        CheckoutCalculator { shipping }
    }
}

impl CheckoutEngine for CheckoutCalculator {
    fn calculate_totals(&self, cart: &Cart) -> CoreResult<CheckoutSummary> {
        // The address check comes first: no cost computation may run for an
        // unshippable cart.
        let destination = cart
            .shipping_address
            .as_ref()
            .ok_or(CoreError::MissingShippingAddress)?;

        let item_cost = cart.item_cost();
        let shipping_cost = self.shipping.calculate_shipping_cost(cart, destination);
        let discount = cart.customer_tier.discount();

        let total = (item_cost + shipping_cost).apply_discount(discount);

        Ok(CheckoutSummary {
            cart_id: cart.id.clone(),
            item_cost_cents: item_cost.cents(),
            shipping_cents: shipping_cost.cents(),
            customer_discount_bps: discount.bps(),
            total_cents: total.cents(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, CustomerTier, LineItem, ShippingMethod};

    fn test_address(city: &str) -> Address {
        Address::new("US", city, "1 Main St")
    }

    fn test_item(product_id: &str, price_cents: i64, quantity: i64) -> LineItem {
        LineItem {
            product_id: product_id.to_string(),
            product_name: format!("Product {}", product_id),
            unit_price_cents: price_cents,
            quantity,
        }
    }

    fn test_engine() -> CheckoutCalculator {
        CheckoutCalculator::new(ShippingCalculator::new(test_address("Austin")))
    }

    fn cart_with_items(tier: CustomerTier, items: Vec<LineItem>) -> Cart {
        let mut cart = Cart::new(
            "customer-1",
            tier,
            ShippingMethod::Standard,
            Some(test_address("Dallas")),
        );
        for item in items {
            cart.add_item(item);
        }
        cart
    }

    #[test]
    fn test_missing_address_fails_before_costing() {
        let engine = test_engine();
        let mut cart = cart_with_items(CustomerTier::Standard, vec![test_item("1", 200, 3)]);
        cart.shipping_address = None;

        let err = engine.calculate_totals(&cart).unwrap_err();
        assert!(matches!(err, CoreError::MissingShippingAddress));
    }

    #[test]
    fn test_discount_based_on_customer_tier() {
        let engine = test_engine();

        let cases = [(CustomerTier::Standard, 0), (CustomerTier::Premium, 1000)];
        for (tier, expected_bps) in cases {
            let cart = cart_with_items(tier, vec![test_item("1", 200, 3)]);
            let summary = engine.calculate_totals(&cart).unwrap();
            assert_eq!(summary.customer_discount_bps, expected_bps);
        }
    }

    #[test]
    fn test_standard_customer_total_equals_cost_plus_shipping() {
        let engine = test_engine();

        for method in [
            ShippingMethod::Standard,
            ShippingMethod::Express,
            ShippingMethod::Expedited,
            ShippingMethod::Priority,
        ] {
            let mut cart = cart_with_items(CustomerTier::Standard, vec![test_item("1", 200, 3)]);
            cart.shipping_method = method;

            let summary = engine.calculate_totals(&cart).unwrap();
            assert_eq!(
                summary.total_cents,
                summary.item_cost_cents + summary.shipping_cents,
                "method {:?}",
                method
            );
            assert_eq!(summary.item_cost_cents, 600);
        }
    }

    #[test]
    fn test_more_than_one_item_sums_line_totals() {
        let engine = test_engine();
        let cart = cart_with_items(
            CustomerTier::Standard,
            vec![test_item("1", 200, 3), test_item("2", 400, 5)],
        );

        let summary = engine.calculate_totals(&cart).unwrap();
        assert_eq!(summary.item_cost_cents, 200 * 3 + 400 * 5);
        assert_eq!(
            summary.total_cents,
            summary.item_cost_cents + summary.shipping_cents
        );
    }

    #[test]
    fn test_premium_customer_pays_ninety_percent() {
        let engine = test_engine();
        // 10 units at $2.00 = $20.00 items; 10 × $2.00 = $20.00 shipping.
        // Both divisible by 10, so the 10% discount is exact.
        let cart = cart_with_items(CustomerTier::Premium, vec![test_item("1", 200, 10)]);

        let summary = engine.calculate_totals(&cart).unwrap();
        let gross = summary.item_cost_cents + summary.shipping_cents;
        assert_eq!(summary.total_cents, gross * 9 / 10);
    }

    #[test]
    fn test_summary_carries_cart_id() {
        let engine = test_engine();
        let cart = cart_with_items(CustomerTier::Standard, vec![test_item("1", 100, 1)]);

        let summary = engine.calculate_totals(&cart).unwrap();
        assert_eq!(summary.cart_id, cart.id);
    }
}

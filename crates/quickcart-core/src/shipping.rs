//! # Shipping Cost Calculator
//!
//! Computes the shipping cost for a cart from the ship-from origin, the
//! destination address, and the selected shipping method.
//!
//! ## Cost Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shipping = total quantity × distance rate × method multiplier          │
//! │                                                                         │
//! │  Distance rate (per unit):          Method multiplier:                  │
//! │    same city          $1.00           Standard   ×1.0                   │
//! │    same country       $2.00           Express    ×1.5                   │
//! │    international     $15.00           Expedited  ×2.5                   │
//! │                                       Priority   ×4.0                   │
//! │                                                                         │
//! │  All math is integer cents; multipliers are percent values so the       │
//! │  result stays deterministic with no floating point.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator assumes a destination is present; the checkout engine
//! fails with the missing-address error before ever calling it.

use crate::money::Money;
use crate::types::{Address, Cart, ShippingMethod};

// =============================================================================
// Rate Table
// =============================================================================

/// Per-unit rate when origin and destination share a city, in cents.
pub const SAME_CITY_RATE_CENTS: i64 = 100;

/// Per-unit rate within one country but across cities, in cents.
pub const SAME_COUNTRY_RATE_CENTS: i64 = 200;

/// Per-unit rate across countries, in cents.
pub const INTERNATIONAL_RATE_CENTS: i64 = 1500;

impl ShippingMethod {
    /// Cost multiplier for this method, in percent (100 = ×1.0).
    ///
    /// Strictly increasing in the Standard → Express → Expedited → Priority
    /// order.
    pub const fn multiplier_pct(&self) -> i64 {
        match self {
            ShippingMethod::Standard => 100,
            ShippingMethod::Express => 150,
            ShippingMethod::Expedited => 250,
            ShippingMethod::Priority => 400,
        }
    }
}

// =============================================================================
// Shipping Calculator
// =============================================================================

/// Computes shipping costs relative to a fixed ship-from origin.
///
/// ## Usage
/// ```rust
/// use quickcart_core::shipping::ShippingCalculator;
/// use quickcart_core::types::Address;
///
/// let calculator = ShippingCalculator::new(Address::new("US", "Austin", "1 Depot Rd"));
/// ```
#[derive(Debug, Clone)]
pub struct ShippingCalculator {
    origin: Address,
}

impl ShippingCalculator {
    /// Creates a calculator shipping from the given origin address.
    pub fn new(origin: Address) -> Self {
        ShippingCalculator { origin }
    }

    /// Calculates the shipping cost for a cart to a destination.
    ///
    /// Deterministic for identical inputs and never negative. An empty cart
    /// ships for free (zero units to move).
    pub fn calculate_shipping_cost(&self, cart: &Cart, destination: &Address) -> Money {
        let rate_cents = self.distance_rate_cents(destination);
        let units = cart.total_quantity();
        let multiplier_pct = cart.shipping_method.multiplier_pct();

        Money::from_cents(units * rate_cents * multiplier_pct / 100)
    }

    /// Per-unit rate for the distance between origin and destination.
    ///
    /// City and country comparisons are exact; normalization is the
    /// transport layer's concern.
    fn distance_rate_cents(&self, destination: &Address) -> i64 {
        if self.origin.country != destination.country {
            INTERNATIONAL_RATE_CENTS
        } else if self.origin.city != destination.city {
            SAME_COUNTRY_RATE_CENTS
        } else {
            SAME_CITY_RATE_CENTS
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerTier, LineItem};

    fn test_address(city: &str) -> Address {
        Address::new("US", city, "1 Main St")
    }

    fn test_cart(method: ShippingMethod, quantity: i64) -> Cart {
        let mut cart = Cart::new("customer-1", CustomerTier::Standard, method, None);
        cart.add_item(LineItem {
            product_id: "1".to_string(),
            product_name: "Product 1".to_string(),
            unit_price_cents: 200,
            quantity,
        });
        cart
    }

    #[test]
    fn test_same_city_standard() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let cart = test_cart(ShippingMethod::Standard, 3);

        let cost = calculator.calculate_shipping_cost(&cart, &test_address("Austin"));
        // 3 units × $1.00 × 1.0
        assert_eq!(cost.cents(), 300);
    }

    #[test]
    fn test_same_country_rate() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let cart = test_cart(ShippingMethod::Standard, 3);

        let cost = calculator.calculate_shipping_cost(&cart, &test_address("Dallas"));
        // 3 units × $2.00 × 1.0
        assert_eq!(cost.cents(), 600);
    }

    #[test]
    fn test_international_rate() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let cart = test_cart(ShippingMethod::Standard, 2);

        let destination = Address::new("FR", "Paris", "1 Rue de Test");
        let cost = calculator.calculate_shipping_cost(&cart, &destination);
        // 2 units × $15.00 × 1.0
        assert_eq!(cost.cents(), 3000);
    }

    #[test]
    fn test_method_multipliers() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let destination = test_address("Dallas");

        // 2 units × $2.00 base, scaled per method
        let expected = [
            (ShippingMethod::Standard, 400),
            (ShippingMethod::Express, 600),
            (ShippingMethod::Expedited, 1000),
            (ShippingMethod::Priority, 1600),
        ];

        for (method, cents) in expected {
            let cart = test_cart(method, 2);
            let cost = calculator.calculate_shipping_cost(&cart, &destination);
            assert_eq!(cost.cents(), cents, "method {:?}", method);
        }
    }

    #[test]
    fn test_cost_monotonic_by_method_tier() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let destination = Address::new("FR", "Paris", "1 Rue de Test");

        let ordered = [
            ShippingMethod::Standard,
            ShippingMethod::Express,
            ShippingMethod::Expedited,
            ShippingMethod::Priority,
        ];

        let costs: Vec<i64> = ordered
            .iter()
            .map(|m| {
                calculator
                    .calculate_shipping_cost(&test_cart(*m, 4), &destination)
                    .cents()
            })
            .collect();

        for pair in costs.windows(2) {
            assert!(pair[0] <= pair[1], "costs not monotonic: {:?}", costs);
        }
    }

    #[test]
    fn test_never_negative_and_deterministic() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let destination = test_address("Dallas");
        let cart = test_cart(ShippingMethod::Priority, 7);

        let first = calculator.calculate_shipping_cost(&cart, &destination);
        let second = calculator.calculate_shipping_cost(&cart, &destination);

        assert_eq!(first, second);
        assert!(!first.is_negative());
    }

    #[test]
    fn test_empty_cart_ships_free() {
        let calculator = ShippingCalculator::new(test_address("Austin"));
        let cart = Cart::new(
            "customer-1",
            CustomerTier::Standard,
            ShippingMethod::Priority,
            None,
        );

        let cost = calculator.calculate_shipping_cost(&cart, &test_address("Dallas"));
        assert!(cost.is_zero());
    }
}

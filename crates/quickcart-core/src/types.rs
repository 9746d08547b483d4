//! # Domain Types
//!
//! Core domain types used throughout Quickcart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Cart       │   │    LineItem     │   │     Coupon      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  product_id     │   │  id (UUID)      │       │
//! │  │  customer_tier  │   │  product_name   │   │  coupon_type    │       │
//! │  │  shipping_*     │   │  price_cents    │   │  value          │       │
//! │  │  items          │   │  quantity       │   │  expiration     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CustomerTier   │   │ ShippingMethod  │   │   CouponType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Standard       │   │  Standard       │   │  Amount         │       │
//! │  │  Premium        │   │  Express        │   │  Percentage     │       │
//! │  └─────────────────┘   │  Expedited      │   └─────────────────┘       │
//! │                        │  Priority       │                             │
//! │                        └─────────────────┘                             │
//! │                                                                         │
//! │  CheckoutSummary / CheckoutResult are derived per request and never     │
//! │  persisted or mutated after construction.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::money::{DiscountRate, Money};

// =============================================================================
// Customer Tier
// =============================================================================

/// The customer's membership tier, which drives the checkout discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    /// Regular customer, no tier discount.
    Standard,
    /// Premium customer, 10% off item cost + shipping.
    Premium,
}

impl CustomerTier {
    /// The checkout discount rate granted to this tier.
    pub const fn discount(&self) -> DiscountRate {
        match self {
            CustomerTier::Standard => DiscountRate::zero(),
            CustomerTier::Premium => DiscountRate::from_bps(1000),
        }
    }
}

impl Default for CustomerTier {
    fn default() -> Self {
        CustomerTier::Standard
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// The delivery speed selected for a cart.
///
/// Cost is monotonically non-decreasing in the order declared here:
/// Standard ≤ Express ≤ Expedited ≤ Priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Standard,
    Express,
    Expedited,
    Priority,
}

impl Default for ShippingMethod {
    fn default() -> Self {
        ShippingMethod::Standard
    }
}

// =============================================================================
// Address
// =============================================================================

/// A shipping address.
///
/// Validity (all fields non-empty) is an external collaborator's concern;
/// see the `AddressValidator` trait in the validation module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
}

impl Address {
    /// Creates an address from its three required fields.
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Address {
            country: country.into(),
            city: city.into(),
            street: street.into(),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line item in a cart.
///
/// Owned exclusively by its cart; unique by `product_id` within the cart.
/// The price is frozen at the time the item is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub product_name: String,

    /// Unit price in cents at time of adding (frozen). Never negative.
    pub unit_price_cents: i64,

    /// Quantity in cart. Always positive.
    pub quantity: i64,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price().multiply_quantity(self.quantity).cents()
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A customer's in-progress collection of line items pending checkout.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product merges
///   quantities additively)
/// - The shipping address may stay absent until checkout; checkout itself
///   requires it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer this cart belongs to.
    pub customer_id: String,

    /// Customer membership tier.
    pub customer_tier: CustomerTier,

    /// Destination address. Optional until checkout.
    pub shipping_address: Option<Address>,

    /// Selected delivery speed.
    pub shipping_method: ShippingMethod,

    /// Line items, unique by product id.
    pub items: Vec<LineItem>,

    /// When the cart was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the cart was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart with a fresh UUID identifier.
    pub fn new(
        customer_id: impl Into<String>,
        customer_tier: CustomerTier,
        shipping_method: ShippingMethod,
        shipping_address: Option<Address>,
    ) -> Self {
        let now = Utc::now();
        Cart {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            customer_tier,
            shipping_address,
            shipping_method,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a line item, or increases quantity if the product is already
    /// present.
    ///
    /// ## Behavior
    /// - If product already in cart: quantities merge additively
    /// - If product not in cart: the item is appended
    pub fn add_item(&mut self, item: LineItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
        self.updated_at = Utc::now();
    }

    /// Removes the line item with the given product id.
    ///
    /// Fails with `ProductNotInCart` if no line item matches; the cart is
    /// left untouched in that case.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CoreError> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotInCart(product_id.to_string()))
        } else {
            self.updated_at = Utc::now();
            Ok(())
        }
    }

    /// Checks whether a product id is already in the cart.
    pub fn contains_product(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Returns the number of unique line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the item cost subtotal in cents.
    pub fn item_cost_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Returns the item cost subtotal as Money.
    #[inline]
    pub fn item_cost(&self) -> Money {
        Money::from_cents(self.item_cost_cents())
    }

    /// Checks if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// The kind of discount a coupon grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CouponType {
    /// Fixed value off the checkout total. `value` is in cents.
    Amount,
    /// Percentage of the checkout total. `value` is in basis points.
    Percentage,
}

/// A discount code with a type, value, and expiration.
///
/// Created independently of carts; referenced by identifier at checkout
/// time, never owned by a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Discount kind.
    pub coupon_type: CouponType,

    /// Discount value. Unit depends on `coupon_type`: cents for Amount,
    /// basis points for Percentage. Signed so that a negative value can be
    /// represented and rejected at redemption time.
    pub value: i64,

    /// Instant after which the coupon is no longer redeemable.
    #[ts(as = "String")]
    pub expiration: DateTime<Utc>,
}

impl Coupon {
    /// Creates a new coupon with a fresh UUID identifier.
    pub fn new(coupon_type: CouponType, value: i64, expiration: DateTime<Utc>) -> Self {
        Coupon {
            id: Uuid::new_v4().to_string(),
            coupon_type,
            value,
            expiration,
        }
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// The pre-coupon totals for a cart.
///
/// Derived, never persisted; produced fresh on every checkout request and
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutSummary {
    /// The cart these totals were computed for.
    pub cart_id: String,

    /// Σ(unit price × quantity) over all line items, in cents.
    pub item_cost_cents: i64,

    /// Shipping cost in cents.
    pub shipping_cents: i64,

    /// Customer tier discount that was applied, in basis points.
    pub customer_discount_bps: u32,

    /// Pre-coupon total in cents:
    /// (item cost + shipping) minus the customer discount.
    pub total_cents: i64,
}

impl CheckoutSummary {
    /// Returns the item cost subtotal as Money.
    #[inline]
    pub fn item_cost(&self) -> Money {
        Money::from_cents(self.item_cost_cents)
    }

    /// Returns the shipping cost as Money.
    #[inline]
    pub fn shipping_cost(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    /// Returns the applied customer discount rate.
    #[inline]
    pub fn customer_discount(&self) -> DiscountRate {
        DiscountRate::from_bps(self.customer_discount_bps)
    }

    /// Returns the pre-coupon total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Checkout Result
// =============================================================================

/// The externally visible result of a checkout calculation: the summary
/// plus the coupon discount and the final total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutResult {
    /// Pre-coupon totals.
    pub summary: CheckoutSummary,

    /// Coupon discount in cents. Zero when no coupon was supplied.
    pub coupon_discount_cents: i64,

    /// Final total in cents: summary total minus coupon discount.
    /// May be negative when an uncapped Amount coupon exceeds the total.
    pub total_after_coupon_cents: i64,
}

impl CheckoutResult {
    /// Builds a result from a summary and a coupon discount, deriving the
    /// final total.
    pub fn new(summary: CheckoutSummary, coupon_discount: Money) -> Self {
        let total_after_coupon = summary.total() - coupon_discount;
        CheckoutResult {
            summary,
            coupon_discount_cents: coupon_discount.cents(),
            total_after_coupon_cents: total_after_coupon.cents(),
        }
    }

    /// Returns the coupon discount as Money.
    #[inline]
    pub fn coupon_discount(&self) -> Money {
        Money::from_cents(self.coupon_discount_cents)
    }

    /// Returns the final total as Money.
    #[inline]
    pub fn total_after_coupon(&self) -> Money {
        Money::from_cents(self.total_after_coupon_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # quickcart-core: Pure Business Logic for Quickcart
//!
//! This crate is the **heart** of Quickcart. It contains all checkout
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quickcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              HTTP Transport (outside this workspace)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   quickcart-service                             │   │
//! │  │    CartManager, CouponService, repositories, DTOs               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quickcart-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │ shipping  │  │ checkout  │   │   │
//! │  │   │   Cart    │  │   Money   │  │ rate table│  │  totals   │   │   │
//! │  │   │  Coupon   │  │ Discount  │  │ distance  │  │ discounts │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Cart, LineItem, Coupon, CheckoutSummary, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and the address validator
//! - [`clock`] - Injected time source
//! - [`shipping`] - Shipping cost calculator
//! - [`checkout`] - Checkout totals engine
//! - [`coupon`] - Coupon validation and discount engine
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input =
//!    same output. Even "now" is an injected [`clock::Clock`].
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quickcart_core::checkout::{CheckoutCalculator, CheckoutEngine};
//! use quickcart_core::shipping::ShippingCalculator;
//! use quickcart_core::types::{Address, Cart, CustomerTier, LineItem, ShippingMethod};
//!
//! let origin = Address::new("US", "Austin", "1 Depot Rd");
//! let engine = CheckoutCalculator::new(ShippingCalculator::new(origin));
//!
//! let mut cart = Cart::new(
//!     "customer-1",
//!     CustomerTier::Premium,
//!     ShippingMethod::Express,
//!     Some(Address::new("US", "Dallas", "9 Elm St")),
//! );
//! cart.add_item(LineItem {
//!     product_id: "coffee-1kg".to_string(),
//!     product_name: "Coffee Beans 1kg".to_string(),
//!     unit_price_cents: 1800,
//!     quantity: 2,
//! });
//!
//! let summary = engine.calculate_totals(&cart).unwrap();
//! assert_eq!(summary.item_cost_cents, 3600);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod clock;
pub mod coupon;
pub mod error;
pub mod money;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quickcart_core::Money` instead of
// `use quickcart_core::money::Money`

pub use checkout::{CheckoutCalculator, CheckoutEngine};
pub use clock::{Clock, FixedClock, SystemClock};
pub use coupon::{CouponCalculator, CouponEngine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use shipping::ShippingCalculator;
pub use types::*;
pub use validation::{AddressValidator, RequiredFieldsValidator};

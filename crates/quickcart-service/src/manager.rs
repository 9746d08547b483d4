//! # Cart Manager
//!
//! The orchestrator behind every cart operation the transport exposes.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              calculate_totals(cart_id, coupon_id?)                      │
//! │                                                                         │
//! │  1. CartRepository.find_by_id ───── absent ──► NOT_FOUND                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  2. CheckoutEngine.calculate_totals ─ no address ──► MISSING_DATA       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  3. coupon_id supplied?                                                 │
//! │     ├── no  ──► coupon discount = 0                                     │
//! │     └── yes ──► CouponRepository.find_by_id ── absent ──► NOT_FOUND     │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │                 CouponEngine.calculate_discount ──► INVALID_COUPON?     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  4. total_after_coupon = summary.total − coupon discount                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The manager catches nothing internally: every domain failure flows to the
//! transport boundary as a typed [`ApiError`].

use tracing::debug;

use crate::dto::{CartDto, CreateCartRequest, ItemRequest};
use crate::error::ApiError;
use crate::repository::{
    CartRepository, CouponRepository, InMemoryCartRepository, InMemoryCouponRepository,
};
use quickcart_core::{
    validation, Address, AddressValidator, Cart, CheckoutCalculator, CheckoutEngine,
    CheckoutResult, CoreError, CouponCalculator, CouponEngine, LineItem, Money,
    RequiredFieldsValidator, ShippingCalculator,
};

/// Orchestrates cart CRUD and checkout pricing.
///
/// Repositories are generic so a persistence adapter can slot in; engines
/// and the address validator are boxed trait objects so tests can swap in
/// fakes.
pub struct CartManager<C: CartRepository, K: CouponRepository> {
    carts: C,
    coupons: K,
    checkout_engine: Box<dyn CheckoutEngine>,
    coupon_engine: Box<dyn CouponEngine>,
    address_validator: Box<dyn AddressValidator>,
}

impl CartManager<InMemoryCartRepository, InMemoryCouponRepository> {
    /// Creates a fully wired manager over in-memory stores, shipping from
    /// the given origin address.
    pub fn in_memory(origin: Address) -> Self {
        CartManager::new(
            InMemoryCartRepository::new(),
            InMemoryCouponRepository::new(),
            Box::new(CheckoutCalculator::new(ShippingCalculator::new(origin))),
            Box::new(CouponCalculator::new()),
            Box::new(RequiredFieldsValidator),
        )
    }
}

impl<C: CartRepository, K: CouponRepository> CartManager<C, K> {
    /// Creates a manager from its collaborators.
    pub fn new(
        carts: C,
        coupons: K,
        checkout_engine: Box<dyn CheckoutEngine>,
        coupon_engine: Box<dyn CouponEngine>,
        address_validator: Box<dyn AddressValidator>,
    ) -> Self {
        CartManager {
            carts,
            coupons,
            checkout_engine,
            coupon_engine,
            address_validator,
        }
    }

    /// Returns the coupon repository the manager redeems against.
    ///
    /// The coupon catalog is shared state: whoever stocks it (a
    /// [`crate::coupons::CouponService`] or a seeding script) needs the same
    /// store this manager reads at checkout.
    pub fn coupons(&self) -> &K {
        &self.coupons
    }

    /// Computes the full checkout result for a cart, optionally applying a
    /// coupon.
    pub async fn calculate_totals(
        &self,
        cart_id: &str,
        coupon_id: Option<&str>,
    ) -> Result<CheckoutResult, ApiError> {
        debug!(cart_id = %cart_id, coupon_id = ?coupon_id, "calculate_totals");

        let cart = self
            .carts
            .find_by_id(cart_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Cart", cart_id))?;

        let summary = self.checkout_engine.calculate_totals(&cart)?;

        let coupon_discount = match coupon_id {
            Some(coupon_id) => {
                let coupon = self
                    .coupons
                    .find_by_id(coupon_id)
                    .await?
                    .ok_or_else(|| ApiError::not_found("Coupon", coupon_id))?;
                self.coupon_engine.calculate_discount(&summary, &coupon)?
            }
            None => Money::zero(),
        };

        Ok(CheckoutResult::new(summary, coupon_discount))
    }

    /// Creates a cart from a request payload.
    ///
    /// ## Behavior
    /// - A supplied shipping address must pass the address validator; an
    ///   absent address is allowed (checkout will demand one later)
    /// - Duplicate product ids in the submitted items are rejected before
    ///   anything is persisted
    pub async fn create(&self, request: CreateCartRequest) -> Result<CartDto, ApiError> {
        debug!(customer_id = %request.customer_id, "create cart");

        if let Some(address) = &request.shipping_address {
            if !self.address_validator.is_valid(address) {
                return Err(
                    CoreError::invalid_address("country, city, and street are required").into(),
                );
            }
        }

        let mut cart = Cart::new(
            request.customer_id,
            request.customer_tier,
            request.shipping_method,
            request.shipping_address,
        );

        for item_request in request.items {
            // Duplicates are a request defect, not a merge
            if cart.contains_product(&item_request.product_id) {
                return Err(CoreError::DuplicateProduct {
                    product_id: item_request.product_id,
                }
                .into());
            }
            cart.add_item(validated_item(item_request)?);
        }

        let cart = self.carts.create(cart).await?;
        Ok(CartDto::from(&cart))
    }

    /// Returns the cart with the given id.
    pub async fn get(&self, cart_id: &str) -> Result<CartDto, ApiError> {
        debug!(cart_id = %cart_id, "get cart");

        let cart = self
            .carts
            .find_by_id(cart_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Cart", cart_id))?;
        Ok(CartDto::from(&cart))
    }

    /// Returns every stored cart.
    pub async fn list(&self) -> Result<Vec<CartDto>, ApiError> {
        debug!("list carts");

        let carts = self.carts.find_all().await?;
        Ok(carts.iter().map(CartDto::from).collect())
    }

    /// Adds an item to a cart, merging quantities when the product is
    /// already present.
    pub async fn add_item(&self, cart_id: &str, item: ItemRequest) -> Result<CartDto, ApiError> {
        debug!(cart_id = %cart_id, product_id = %item.product_id, "add_item");

        let mut cart = self
            .carts
            .find_by_id(cart_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Cart", cart_id))?;

        cart.add_item(validated_item(item)?);

        self.carts.update(cart_id, cart.clone()).await?;
        Ok(CartDto::from(&cart))
    }

    /// Removes the line item with the given product id from a cart.
    ///
    /// A missing product id fails before the store is touched.
    pub async fn remove_item(&self, cart_id: &str, product_id: &str) -> Result<CartDto, ApiError> {
        debug!(cart_id = %cart_id, product_id = %product_id, "remove_item");

        let mut cart = self
            .carts
            .find_by_id(cart_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Cart", cart_id))?;

        cart.remove_item(product_id)?;

        self.carts.update(cart_id, cart.clone()).await?;
        Ok(CartDto::from(&cart))
    }

    /// Deletes a cart.
    pub async fn delete(&self, cart_id: &str) -> Result<(), ApiError> {
        debug!(cart_id = %cart_id, "delete cart");

        self.carts.remove(cart_id).await?;
        Ok(())
    }
}

/// Validates an item request's fields and converts it to a line item.
fn validated_item(request: ItemRequest) -> Result<LineItem, ApiError> {
    validation::validate_product_id(&request.product_id).map_err(CoreError::from)?;
    validation::validate_product_name(&request.product_name).map_err(CoreError::from)?;
    validation::validate_unit_price(request.unit_price_cents).map_err(CoreError::from)?;
    validation::validate_quantity(request.quantity).map_err(CoreError::from)?;

    Ok(request.into())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # DTOs and Request Payloads
//!
//! External-facing projections of the domain entities, plus the request
//! payloads the transport submits.
//!
//! DTOs are field-for-field projections: no behavior, camelCase wire names,
//! TypeScript bindings for the frontend of whatever transport fronts this
//! service. Entities never cross the service boundary directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use quickcart_core::{
    Address, Cart, Coupon, CouponType, CustomerTier, LineItem, ShippingMethod,
};

// =============================================================================
// Cart DTOs
// =============================================================================

/// A cart line item as seen by external callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

impl From<&LineItem> for LineItemDto {
    fn from(item: &LineItem) -> Self {
        LineItemDto {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
        }
    }
}

/// A cart as seen by external callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub id: String,
    pub customer_id: String,
    pub customer_tier: CustomerTier,
    pub shipping_address: Option<Address>,
    pub shipping_method: ShippingMethod,
    pub items: Vec<LineItemDto>,
}

impl From<&Cart> for CartDto {
    fn from(cart: &Cart) -> Self {
        CartDto {
            id: cart.id.clone(),
            customer_id: cart.customer_id.clone(),
            customer_tier: cart.customer_tier,
            shipping_address: cart.shipping_address.clone(),
            shipping_method: cart.shipping_method,
            items: cart.items.iter().map(LineItemDto::from).collect(),
        }
    }
}

// =============================================================================
// Coupon DTO
// =============================================================================

/// A coupon as seen by external callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: String,
    pub coupon_type: CouponType,
    pub value: i64,
    #[ts(as = "String")]
    pub expiration: DateTime<Utc>,
}

impl From<&Coupon> for CouponDto {
    fn from(coupon: &Coupon) -> Self {
        CouponDto {
            id: coupon.id.clone(),
            coupon_type: coupon.coupon_type,
            value: coupon.value,
            expiration: coupon.expiration,
        }
    }
}

// =============================================================================
// Request Payloads
// =============================================================================

/// A line item as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

impl From<ItemRequest> for LineItem {
    fn from(request: ItemRequest) -> Self {
        LineItem {
            product_id: request.product_id,
            product_name: request.product_name,
            unit_price_cents: request.unit_price_cents,
            quantity: request.quantity,
        }
    }
}

/// Payload for creating a cart.
///
/// The shipping address may be omitted; checkout requires one, creation
/// does not.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartRequest {
    pub customer_id: String,
    pub customer_tier: CustomerTier,
    pub shipping_method: ShippingMethod,
    pub shipping_address: Option<Address>,
    pub items: Vec<ItemRequest>,
}

/// Payload for creating a coupon.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponRequest {
    pub coupon_type: CouponType,
    pub value: i64,
    #[ts(as = "String")]
    pub expiration: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_dto_projection() {
        let mut cart = Cart::new(
            "customer-1",
            CustomerTier::Premium,
            ShippingMethod::Express,
            Some(Address::new("US", "Austin", "1 Main St")),
        );
        cart.add_item(LineItem {
            product_id: "p-1".to_string(),
            product_name: "Product 1".to_string(),
            unit_price_cents: 999,
            quantity: 2,
        });

        let dto = CartDto::from(&cart);

        assert_eq!(dto.id, cart.id);
        assert_eq!(dto.customer_id, "customer-1");
        assert_eq!(dto.customer_tier, CustomerTier::Premium);
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].unit_price_cents, 999);
        assert_eq!(dto.items[0].quantity, 2);
    }

    #[test]
    fn test_cart_dto_wire_names_are_camel_case() {
        let cart = Cart::new(
            "customer-1",
            CustomerTier::Standard,
            ShippingMethod::Standard,
            None,
        );

        let json = serde_json::to_value(CartDto::from(&cart)).unwrap();
        assert!(json.get("customerId").is_some());
        assert!(json.get("shippingMethod").is_some());
        assert!(json.get("customer_id").is_none());
    }

    #[test]
    fn test_item_request_into_line_item() {
        let request = ItemRequest {
            product_id: "p-1".to_string(),
            product_name: "Product 1".to_string(),
            unit_price_cents: 250,
            quantity: 4,
        };

        let item: LineItem = request.into();
        assert_eq!(item.line_total_cents(), 1000);
    }
}

//! # API Error Type
//!
//! Unified error type at the service boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Quickcart                             │
//! │                                                                         │
//! │  Transport                     Service Layer                            │
//! │  ─────────                     ─────────────                            │
//! │                                                                         │
//! │  POST /carts/{id}/checkout                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  CartManager operation                                           │   │
//! │  │  Result<T, ApiError>                                             │   │
//! │  │         │                                                        │   │
//! │  │         ▼                                                        │   │
//! │  │  Store miss?   ─── StoreError::NotFound ──────────┐              │   │
//! │  │         │                                         │              │   │
//! │  │         ▼                                         ▼              │   │
//! │  │  Domain error? ─── CoreError::InvalidCoupon ── ApiError ───────► │   │
//! │  │         │                                                        │   │
//! │  │         ▼                                                        │   │
//! │  │  Success ──────────────────────────────────────────────────────► │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  The transport reads `code` to pick the response status:                │
//! │  NOT_FOUND → 404, everything coupon/data-shaped → 400.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The error is serializable so the transport can pass it through verbatim:
//! both a machine-readable `code` and a human-readable `message`.

use serde::Serialize;

use crate::repository::StoreError;
use quickcart_core::CoreError;

/// API error returned from service operations.
///
/// ## Serialization
/// This is what the transport forwards when an operation fails:
/// ```json
/// {
///   "code": "INVALID_COUPON",
///   "message": "Invalid coupon: value is negative"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// The codes partition cleanly by response status so the transport never
/// inspects messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Cart, coupon, or line item not found (404)
    NotFound,

    /// Checkout attempted without a shipping address (400)
    MissingData,

    /// Coupon expired or carries a negative value (400)
    InvalidCoupon,

    /// Cart creation repeated a product id (400)
    DuplicateItem,

    /// Shipping address failed validation (400)
    InvalidAddress,

    /// Field-level input validation failed (400)
    ValidationError,

    /// Internal service error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a field validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CartNotFound(id) => ApiError::not_found("Cart", &id),
            CoreError::CouponNotFound(id) => ApiError::not_found("Coupon", &id),
            CoreError::ProductNotInCart(id) => ApiError::not_found("Product", &id),
            CoreError::MissingShippingAddress => {
                ApiError::new(ErrorCode::MissingData, err.to_string())
            }
            CoreError::InvalidCoupon { .. } => {
                ApiError::new(ErrorCode::InvalidCoupon, err.to_string())
            }
            CoreError::DuplicateProduct { .. } => {
                ApiError::new(ErrorCode::DuplicateItem, err.to_string())
            }
            CoreError::InvalidAddress { .. } => {
                ApiError::new(ErrorCode::InvalidAddress, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts repository errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::CartNotFound("cart-1".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Cart not found: cart-1");

        let err: ApiError = CoreError::MissingShippingAddress.into();
        assert_eq!(err.code, ErrorCode::MissingData);

        let err: ApiError = CoreError::invalid_coupon("value is negative").into();
        assert_eq!(err.code, ErrorCode::InvalidCoupon);

        let err: ApiError = CoreError::DuplicateProduct {
            product_id: "p-1".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::DuplicateItem);
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::not_found("Cart", "cart-1").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Cart not found: cart-1");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::InvalidCoupon, "expired");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_COUPON");
        assert_eq!(json["message"], "expired");
    }
}

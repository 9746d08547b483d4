//! # Error Types
//!
//! Domain-specific error types for quickcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quickcart-core errors (this file)                                      │
//! │  ├── CoreError        - Checkout/coupon domain errors                   │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  quickcart-service errors (separate crate)                              │
//! │  ├── StoreError       - Repository operation failures                   │
//! │  └── ApiError         - What the transport layer sees (serialized)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP response           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (cart id, product id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are deterministic given the input; the transport boundary maps them
/// to not-found vs bad-request responses.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart cannot be found.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// Coupon cannot be found.
    #[error("Coupon not found: {0}")]
    CouponNotFound(String),

    /// A line item with the given product id is not in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added
    /// - Removing the same product twice
    #[error("Product not in cart: {0}")]
    ProductNotInCart(String),

    /// Checkout was attempted on a cart without a shipping address.
    ///
    /// This must be raised before any cost computation runs.
    #[error("Cannot calculate totals: cart has no shipping address")]
    MissingShippingAddress,

    /// Coupon failed validation at redemption time.
    ///
    /// ## When This Occurs
    /// - Coupon value is negative
    /// - Coupon expiration is before the current time
    #[error("Invalid coupon: {reason}")]
    InvalidCoupon { reason: String },

    /// Cart creation submitted the same product id more than once.
    #[error("Duplicate product in cart: {product_id}")]
    DuplicateProduct { product_id: String },

    /// Shipping address failed the address validator.
    #[error("Invalid shipping address: {reason}")]
    InvalidAddress { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidCoupon error with a reason.
    pub fn invalid_coupon(reason: impl Into<String>) -> Self {
        CoreError::InvalidCoupon {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidAddress error with a reason.
    pub fn invalid_address(reason: impl Into<String>) -> Self {
        CoreError::InvalidAddress {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Input validation utilities for Quickcart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (HTTP layer, outside this workspace)                │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate caller feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service operations (Rust)                                     │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: field rules + address verdicts                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain invariants (Cart/engines)                              │
//! │  └── Duplicate products, missing address, coupon validity               │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quickcart_core::validation::{validate_quantity, validate_unit_price};
//!
//! validate_quantity(5).unwrap();
//! validate_unit_price(1099).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Address;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
pub fn validate_product_id(product_id: &str) -> ValidationResult<()> {
    let product_id = product_id.trim();

    if product_id.is_empty() {
        return Err(ValidationError::Required {
            field: "product_id".to_string(),
        });
    }

    if product_id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "product_id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product_name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "product_name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_unit_price(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Address Validator
// =============================================================================

/// Yes/no verdict on whether an address is complete enough to ship to.
///
/// Consumed by the cart manager as an external collaborator; swap in a fake
/// to force either verdict in tests.
pub trait AddressValidator: Send + Sync {
    /// Returns true iff the address can be shipped to.
    fn is_valid(&self, address: &Address) -> bool;
}

/// The default validator: country, city, and street must all be non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldsValidator;

impl AddressValidator for RequiredFieldsValidator {
    fn is_valid(&self, address: &Address) -> bool {
        !address.country.trim().is_empty()
            && !address.city.trim().is_empty()
            && !address.street.trim().is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("prod-1").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"a".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Coffee Beans 1kg").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"a".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(0).is_ok()); // Free item
        assert!(validate_unit_price(1099).is_ok());
        assert!(validate_unit_price(-100).is_err());
    }

    #[test]
    fn test_required_fields_validator() {
        let validator = RequiredFieldsValidator;

        let address = Address::new("US", "Austin", "1 Main St");
        assert!(validator.is_valid(&address));

        let missing_city = Address::new("US", "", "1 Main St");
        assert!(!validator.is_valid(&missing_city));

        let blank_street = Address::new("US", "Austin", "   ");
        assert!(!validator.is_valid(&blank_street));
    }
}

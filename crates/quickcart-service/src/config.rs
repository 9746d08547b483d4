//! Service configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.

use serde::{Deserialize, Serialize};
use std::env;

use quickcart_core::Address;

/// Quickcart service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Warehouse address shipments originate from. Shipping costs scale
    /// with the distance between this address and the cart's destination.
    pub ship_from: Address,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServiceConfig {
            ship_from: Address::new(
                env::var("SHIP_FROM_COUNTRY").unwrap_or_else(|_| "US".to_string()),
                env::var("SHIP_FROM_CITY").unwrap_or_else(|_| "Austin".to_string()),
                env::var("SHIP_FROM_STREET").unwrap_or_else(|_| "1 Depot Rd".to_string()),
            ),
        };

        // A blank origin would silently misprice every shipment
        if config.ship_from.country.trim().is_empty()
            || config.ship_from.city.trim().is_empty()
            || config.ship_from.street.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue("SHIP_FROM_*".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

//! # Checkout Demo
//!
//! Seeds an in-memory manager with a sample cart and coupon, runs one
//! checkout, and prints the result as JSON.
//!
//! ## Usage
//! ```bash
//! cargo run -p quickcart-service --bin demo
//!
//! # Ship from somewhere else
//! SHIP_FROM_CITY=Berlin SHIP_FROM_COUNTRY=DE cargo run -p quickcart-service --bin demo
//! ```

use chrono::{Duration, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quickcart_core::{Address, CouponType, CustomerTier, ShippingMethod};
use quickcart_service::dto::{CreateCartRequest, ItemRequest};
use quickcart_service::manager::CartManager;
use quickcart_service::repository::CouponRepository;
use quickcart_service::ServiceConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG=debug shows per-operation logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServiceConfig::load()?;
    info!(
        country = %config.ship_from.country,
        city = %config.ship_from.city,
        "Configuration loaded"
    );

    let manager = CartManager::in_memory(config.ship_from);

    // Seed a Premium cart heading to another city
    let cart = manager
        .create(CreateCartRequest {
            customer_id: "customer-demo".to_string(),
            customer_tier: CustomerTier::Premium,
            shipping_method: ShippingMethod::Express,
            shipping_address: Some(Address::new("US", "Dallas", "9 Elm St")),
            items: vec![
                ItemRequest {
                    product_id: "coffee-1kg".to_string(),
                    product_name: "Coffee Beans 1kg".to_string(),
                    unit_price_cents: 1800,
                    quantity: 2,
                },
                ItemRequest {
                    product_id: "grinder".to_string(),
                    product_name: "Burr Grinder".to_string(),
                    unit_price_cents: 6500,
                    quantity: 1,
                },
            ],
        })
        .await?;
    info!(cart_id = %cart.id, items = cart.items.len(), "Cart created");

    // Seed a 10% coupon valid for a day
    let coupon = manager
        .coupons()
        .create(quickcart_core::Coupon::new(
            CouponType::Percentage,
            1000,
            Utc::now() + Duration::days(1),
        ))
        .await?;
    info!(coupon_id = %coupon.id, "Coupon created");

    let result = manager.calculate_totals(&cart.id, Some(&coupon.id)).await?;
    info!(
        total = %result.summary.total(),
        coupon_discount = %result.coupon_discount(),
        final_total = %result.total_after_coupon(),
        "Checkout complete"
    );

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

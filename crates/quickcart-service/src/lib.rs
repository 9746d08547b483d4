//! # quickcart-service: Orchestration Layer for Quickcart
//!
//! Everything between the transport and the pure pricing core: repository
//! contracts, the cart manager, the coupon service, DTO projections, and
//! the service-boundary error type.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              HTTP Transport (outside this workspace)                    │
//! └───────────────────────────────┬─────────────────────────────────────────┘
//! ┌───────────────────────────────▼─────────────────────────────────────────┐
//! │               ★ quickcart-service (THIS CRATE) ★                        │
//! │                                                                         │
//! │   ┌────────────┐  ┌─────────────┐  ┌───────────┐  ┌────────────┐       │
//! │   │ CartManager│  │CouponService│  │repository │  │  dto/error │       │
//! │   │  checkout  │  │    CRUD     │  │ contracts │  │ projections│       │
//! │   │  cart CRUD │  │             │  │ + in-mem  │  │ ApiError   │       │
//! │   └────────────┘  └─────────────┘  └───────────┘  └────────────┘       │
//! └───────────────────────────────┬─────────────────────────────────────────┘
//! ┌───────────────────────────────▼─────────────────────────────────────────┐
//! │                quickcart-core (pure pricing logic)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use quickcart_core::Address;
//! use quickcart_service::manager::CartManager;
//!
//! # async fn run() {
//! let manager = CartManager::in_memory(Address::new("US", "Austin", "1 Depot Rd"));
//! let _result = manager.calculate_totals("cart-1", None).await;
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod coupons;
pub mod dto;
pub mod error;
pub mod manager;
pub mod repository;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{ConfigError, ServiceConfig};
pub use coupons::CouponService;
pub use dto::{CartDto, CouponDto, CreateCartRequest, CreateCouponRequest, ItemRequest, LineItemDto};
pub use error::{ApiError, ErrorCode};
pub use manager::CartManager;
pub use repository::{
    CartRepository, CouponRepository, InMemoryCartRepository, InMemoryCouponRepository,
    StoreError, StoreResult,
};

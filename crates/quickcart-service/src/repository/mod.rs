//! # Repository Layer
//!
//! Storage contracts for carts and coupons, plus in-memory reference
//! implementations.
//!
//! ## Contract Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Repository Contracts                               │
//! │                                                                         │
//! │  CartRepository                     CouponRepository                    │
//! │  ──────────────                     ────────────────                    │
//! │  create(cart)    -> Cart            create(coupon)   -> Coupon          │
//! │  find_by_id(id)  -> Option<Cart>    find_by_id(id)   -> Option<Coupon>  │
//! │  find_all()      -> Vec<Cart>       delete_by_id(id) -> ()              │
//! │  update(id, cart)-> ()                                                  │
//! │  remove(id)      -> ()                                                  │
//! │                                                                         │
//! │  find_by_id returns Option: "absent" is the caller's decision to        │
//! │  escalate. update/remove/delete on a missing id is a StoreError.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Contract
//! The orchestrator issues read-modify-write sequences (find, mutate,
//! update) that are NOT atomic across calls. A persistence adapter used in a
//! concurrent deployment must provide compare-and-swap or optimistic
//! concurrency on `update`; the in-memory reference stores do not.

mod cart;
mod coupon;

pub use cart::InMemoryCartRepository;
pub use coupon::InMemoryCouponRepository;

use thiserror::Error;

use quickcart_core::{Cart, Coupon};

// =============================================================================
// Store Error
// =============================================================================

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Repository Traits
// =============================================================================

/// Storage contract for carts.
pub trait CartRepository: Send + Sync {
    /// Persists a new cart and returns the stored value.
    async fn create(&self, cart: Cart) -> StoreResult<Cart>;

    /// Looks up a cart by id; `None` when absent.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Cart>>;

    /// Returns every stored cart.
    async fn find_all(&self) -> StoreResult<Vec<Cart>>;

    /// Replaces the cart stored under `id`.
    async fn update(&self, id: &str, cart: Cart) -> StoreResult<()>;

    /// Deletes the cart stored under `id`.
    async fn remove(&self, id: &str) -> StoreResult<()>;
}

/// Storage contract for coupons.
pub trait CouponRepository: Send + Sync {
    /// Persists a new coupon and returns the stored value.
    async fn create(&self, coupon: Coupon) -> StoreResult<Coupon>;

    /// Looks up a coupon by id; `None` when absent.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Coupon>>;

    /// Deletes the coupon stored under `id`.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}

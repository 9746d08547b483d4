//! # Clock Abstraction
//!
//! Injected time source for every code path that needs "now".
//!
//! Coupon expiration checks must be deterministic under test, so the coupon
//! engine never reads the wall clock directly; it asks a `Clock`. Production
//! code uses [`SystemClock`], tests use [`FixedClock`].

use chrono::{DateTime, Utc};

/// A source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock: reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant.
///
/// ## Usage
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use quickcart_core::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::at(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
/// assert_eq!(clock.now().timestamp(), 1735732800);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

//! Time source for request timing.

use std::time::Instant;

/// Source of timestamps around each request.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Monotonic system clock (`Instant::now`), sub-microsecond on Linux.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

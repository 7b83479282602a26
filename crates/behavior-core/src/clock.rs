//! Time source for time-gated nodes.
//!
//! [`TimedWait`](crate::TimedWait) latches a deadline against a
//! [`ClockProvider`] rather than calling `Instant::now()` directly, so the
//! same tree topology can be ticked against controlled time in tests.

use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Trait for providing current time.
///
/// Implement this for custom time providers (e.g., a mock clock for
/// testing).
pub trait ClockProvider: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// System clock provider using `std::time::Instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock clock with controllable time, for deterministic tests.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use std::time::{Duration, Instant};
/// use behavior_core::MockClock;
///
/// let clock = Arc::new(MockClock::new(Instant::now()));
/// // ... build a TimedWait against clock.clone() ...
/// clock.advance(Duration::from_secs(2));
/// ```
pub struct MockClock {
    current: RwLock<Instant>,
}

impl MockClock {
    /// Creates a mock clock set to the given instant.
    pub fn new(start: Instant) -> Self {
        Self {
            current: RwLock::new(start),
        }
    }

    /// Advances the clock by the given duration.
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write().expect("MockClock lock poisoned");
        *current += duration;
    }

    /// Sets the clock to a specific instant.
    pub fn set(&self, instant: Instant) {
        let mut current = self.current.write().expect("MockClock lock poisoned");
        *current = instant;
    }
}

impl ClockProvider for MockClock {
    fn now(&self) -> Instant {
        *self.current.read().expect("MockClock lock poisoned")
    }
}

//! Clock - Injectable Time Source
//!
//! TigerStyle: Timestamps are assigned at the storage boundary from a clock
//! the backend owns, so tests can control time explicitly.

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::constants::SIM_CLOCK_ADVANCE_MS_MAX;

/// Source of `created_at` timestamps.
pub trait Clock: Send + Sync + Debug {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// SystemClock
// =============================================================================

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// SimClock
// =============================================================================

/// A simulated clock for deterministic testing.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// pass another to a backend.
///
/// TigerStyle:
/// - Time only moves when told to
/// - `advance_ms` only moves forward; `set_ms` may move anywhere
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Milliseconds since the Unix epoch
    current_ms: Arc<AtomicI64>,
}

impl SimClock {
    /// Create a clock at the Unix epoch.
    ///
    /// # Example
    /// ```
    /// use sprout_store::clock::SimClock;
    /// let clock = SimClock::new();
    /// assert_eq!(clock.now_ms(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::at_ms(0)
    }

    /// Create a clock starting at the given time.
    #[must_use]
    pub fn at_ms(start_ms: i64) -> Self {
        assert!(start_ms >= 0, "start_ms must be non-negative, got {start_ms}");
        Self {
            current_ms: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Current time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.current_ms.load(Ordering::SeqCst)
    }

    /// Advance time by the given milliseconds and return the new time.
    ///
    /// # Panics
    /// Panics if `ms` exceeds `SIM_CLOCK_ADVANCE_MS_MAX`.
    pub fn advance_ms(&self, ms: i64) -> i64 {
        // Preconditions
        assert!(ms >= 0, "advance_ms({ms}) must be non-negative");
        assert!(
            ms <= SIM_CLOCK_ADVANCE_MS_MAX,
            "advance_ms({ms}) exceeds max ({SIM_CLOCK_ADVANCE_MS_MAX})"
        );

        let new_ms = self.current_ms.fetch_add(ms, Ordering::SeqCst) + ms;

        // Postcondition
        assert!(new_ms >= ms, "time must not go backwards");

        new_ms
    }

    /// Set time to an absolute value.
    ///
    /// Unlike a wall clock this may step backwards, which lets tests check
    /// that stores do not trust the clock for ordering.
    pub fn set_ms(&self, ms: i64) {
        assert!(ms >= 0, "set_ms({ms}) must be non-negative");
        self.current_ms.store(ms, Ordering::SeqCst);
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_ms())
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_time() {
        let clock = SimClock::new();
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.now().timestamp_millis(), 0);
    }

    #[test]
    fn test_at_ms() {
        let clock = SimClock::at_ms(5000);
        assert_eq!(clock.now().timestamp(), 5);
    }

    #[test]
    fn test_advance_ms() {
        let clock = SimClock::new();

        clock.advance_ms(100);
        clock.advance_ms(200);
        let new_time = clock.advance_ms(300);

        assert_eq!(new_time, 600);
        assert_eq!(clock.now_ms(), 600);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = SimClock::new();
        let handle = clock.clone();

        handle.advance_ms(1_000);

        assert_eq!(clock.now_ms(), 1_000);
    }

    #[test]
    #[should_panic(expected = "advance_ms")]
    fn test_advance_exceeds_max() {
        let clock = SimClock::new();
        clock.advance_ms(SIM_CLOCK_ADVANCE_MS_MAX + 1);
    }

    #[test]
    fn test_set_ms_can_step_back() {
        let clock = SimClock::at_ms(10_000);
        clock.set_ms(500);
        assert_eq!(clock.now_ms(), 500);
    }

    #[test]
    fn test_system_clock_moves() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}

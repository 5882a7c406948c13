// SPDX-License-Identifier: MPL-2.0
//! Monotonic time sources.
//!
//! Timed state (slide transitions, counter animations) never reads the wall
//! clock directly. It receives the current time as a [`Duration`] measured
//! from an arbitrary origin, which a [`Clock`] provides. The running
//! application uses [`MonotonicClock`]; tests drive [`ManualClock`].

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic time, expressed as elapsed time since the clock origin.
pub trait Clock {
    /// Returns the elapsed time since the clock origin.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Converts an instant delivered by the runtime (e.g. a timer tick) into
    /// clock time. Instants before the origin map to zero.
    #[must_use]
    pub fn at(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.origin)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Moves the clock forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

//! Delta time helpers.

use std::time::{Duration, Instant};

/// Time elapsed since `initial`.
#[inline]
pub fn delta_time(initial: Instant) -> Duration {
    initial.elapsed()
}

/// Milliseconds between two wall-clock timestamps; 0 if `now_ms` is earlier.
#[inline]
pub fn delta_millis(initial_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(initial_ms)
}

/// Per-frame delta: each tick returns the time since the previous one.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//! Frame clocks supplying per-tick delta time.

use std::time::Instant;

/// Source of elapsed seconds between consecutive ticks.
pub trait Clock {
    /// Seconds since the previous call.
    fn delta(&mut self) -> f64;
}

/// Wall-clock delta. The first sample starts the clock and returns 0.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FrameClock {
    fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = self
            .last
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last = Some(now);
        delta
    }
}

/// Constant delta, for headless runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: f64,
}

impl FixedClock {
    pub fn new(step: f64) -> Self {
        Self { step }
    }
}

impl Clock for FixedClock {
    fn delta(&mut self) -> f64 {
        self.step
    }
}

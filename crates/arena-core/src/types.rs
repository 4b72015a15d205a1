//! Fundamental identity and time types.

use serde::{Deserialize, Serialize};

/// Opaque, stable identity of a simulated entity.
///
/// Handles are unique across enemies and projectiles and are never reused
/// within one engine, so the presentation layer can key visuals on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(pub u64);

impl Handle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of non-empty ticks simulated so far.
    pub tick: u64,
    /// Sum of every applied delta, in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        self.tick += 1;
        self.elapsed_secs += delta;
    }
}

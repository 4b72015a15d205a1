//! Running score tracked by the engine.

/// Monotonic score accumulator. Single-threaded; owned by the engine.
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    total: u32,
    hits: u32,
    points_per_hit: u32,
}

impl ScoreTracker {
    pub fn new(points_per_hit: u32) -> Self {
        Self {
            total: 0,
            hits: 0,
            points_per_hit,
        }
    }

    /// Record one hit and return the new total.
    pub fn record_hit(&mut self) -> u32 {
        self.hits = self.hits.saturating_add(1);
        self.total = self.total.saturating_add(self.points_per_hit);
        self.total
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.hits = 0;
    }
}

//! Enemy spawning. Fires at a fixed interval of simulated time.
//!
//! Elapsed delta is accumulated; every full interval in the accumulator
//! yields one spawn (multi-spawn catch-up). A stalled frame of 9 s with a
//! 3 s interval therefore spawns three enemies. At most `max_per_tick`
//! spawns are emitted per tick; any backlog beyond that is dropped.

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::config::ArenaConfig;
use arena_core::types::Handle;

use crate::store::EntityStore;

#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    interval: f64,
    max_per_tick: u32,
    accumulated: f64,
}

impl SpawnScheduler {
    pub fn new(interval: f64, max_per_tick: u32) -> Self {
        Self {
            interval,
            max_per_tick,
            accumulated: 0.0,
        }
    }

    pub fn from_config(config: &ArenaConfig) -> Self {
        Self::new(config.spawn_interval_secs, config.max_spawns_per_tick)
    }

    /// Seconds accumulated toward the next spawn.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Add `delta` seconds and return how many spawns are now due.
    pub fn advance(&mut self, delta: f64) -> u32 {
        self.accumulated += delta;

        let mut due = 0;
        while self.accumulated >= self.interval && due < self.max_per_tick {
            self.accumulated -= self.interval;
            due += 1;
        }

        if self.accumulated >= self.interval {
            let dropped = (self.accumulated / self.interval).floor();
            log::warn!("spawn backlog of {dropped} interval(s) dropped after {due} catch-up spawns");
            self.accumulated = self.accumulated.rem_euclid(self.interval);
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Advance the schedule and spawn any due enemies.
    pub fn run(
        &mut self,
        store: &mut EntityStore,
        rng: &mut ChaCha8Rng,
        config: &ArenaConfig,
        delta: f64,
    ) -> Vec<Handle> {
        let due = self.advance(delta);
        (0..due)
            .map(|_| store.add_enemy(spawn_position(rng, config)))
            .collect()
    }
}

/// Uniform random point in the spawn square at enemy height.
pub fn spawn_position(rng: &mut ChaCha8Rng, config: &ArenaConfig) -> DVec3 {
    let extent = config.spawn_extent;
    let x = rng.gen_range(-extent..extent);
    let z = rng.gen_range(-extent..extent);
    DVec3::new(x, config.enemy_height, z)
}

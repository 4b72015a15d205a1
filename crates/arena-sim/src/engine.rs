//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the entity store, the player, the spawn
//! schedule and the score. The host calls `tick` once per rendered frame
//! with the measured delta and its `InputState`; the engine never blocks,
//! never spawns threads and never reads input from anywhere else.
//! Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::Player;
use arena_core::config::{ArenaConfig, ConfigError};
use arena_core::events::HitEvent;
use arena_core::input::InputState;
use arena_core::state::ArenaSnapshot;
use arena_core::types::SimTime;

use crate::clock::Clock;
use crate::score::ScoreTracker;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::spawner::SpawnScheduler;

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    config: ArenaConfig,
    store: EntityStore,
    player: Player,
    time: SimTime,
    rng: ChaCha8Rng,
    spawner: SpawnScheduler,
    score: ScoreTracker,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::with_valid_config(ArenaConfig::default())
    }
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ArenaConfig) -> Self {
        log::info!("new arena session, seed {}", config.seed);
        Self {
            store: EntityStore::new(),
            player: Player {
                position: config.player_start,
            },
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawner: SpawnScheduler::from_config(&config),
            score: ScoreTracker::new(config.points_per_hit),
            config,
        }
    }

    /// Advance the simulation by `delta` seconds and return the resulting snapshot.
    ///
    /// A zero, negative or non-finite delta is an empty frame: nothing
    /// moves, nothing spawns, and pending fire triggers stay queued. So is a
    /// delta large enough that a displacement overflows.
    pub fn tick(&mut self, delta: f64, input: &mut InputState) -> ArenaSnapshot {
        if !self.is_valid_delta(delta) {
            if delta != 0.0 {
                log::warn!("ignoring invalid frame delta {delta}");
            }
            return self.snapshot(Vec::new());
        }

        self.time.advance(delta);
        self.fire(input);

        // Strict order: motion, spawn, collision.
        systems::movement::move_player(
            &mut self.player,
            input,
            self.config.player_speed,
            delta,
        );
        systems::movement::run_projectiles(
            &mut self.store,
            self.config.projectile_speed,
            self.config.cull_radius,
            delta,
        );
        self.spawner.run(&mut self.store, &mut self.rng, &self.config, delta);
        let hits =
            systems::collision::run(&mut self.store, &mut self.score, self.config.hit_radius);

        self.snapshot(hits)
    }

    /// Sample `clock` and tick with the result.
    pub fn step(&mut self, clock: &mut dyn Clock, input: &mut InputState) -> ArenaSnapshot {
        let delta = clock.delta();
        self.tick(delta, input)
    }

    /// Start a fresh session: every entity is removed (with notifications),
    /// the player returns to the start and score and schedule are zeroed.
    /// The RNG stream continues.
    pub fn reset(&mut self) -> ArenaSnapshot {
        self.store.clear();
        self.player.position = self.config.player_start;
        self.spawner.reset();
        self.score.reset();
        self.time = SimTime::default();
        log::info!("arena session reset");
        self.snapshot(Vec::new())
    }

    fn is_valid_delta(&self, delta: f64) -> bool {
        delta.is_finite()
            && delta > 0.0
            && (self.config.player_speed * delta).is_finite()
            && (self.config.projectile_speed * delta).is_finite()
    }

    /// Spawn one projectile per pending trigger at the player's position.
    fn fire(&mut self, input: &mut InputState) {
        let shots = input.take_fire();
        if shots == 0 {
            return;
        }
        let direction = input.aim().unwrap_or_else(|| self.config.default_aim());
        for _ in 0..shots {
            self.store.add_projectile(self.player.position, direction);
        }
    }

    fn snapshot(&mut self, hits: Vec<HitEvent>) -> ArenaSnapshot {
        systems::snapshot::build_snapshot(
            &mut self.store,
            &self.player,
            &self.time,
            &self.score,
            hits,
        )
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// Get a read-only reference to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn spawner(&self) -> &SpawnScheduler {
        &self.spawner
    }

    /// Place an enemy directly (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: glam::DVec3) -> arena_core::types::Handle {
        self.store.add_enemy(position)
    }

    /// Place a projectile directly (for tests).
    #[cfg(test)]
    pub fn spawn_projectile_at(
        &mut self,
        position: glam::DVec3,
        direction: glam::DVec3,
    ) -> arena_core::types::Handle {
        self.store.add_projectile(position, direction)
    }

    /// Move the player directly (for tests).
    #[cfg(test)]
    pub fn set_player_position(&mut self, position: glam::DVec3) {
        self.player.position = position;
    }
}

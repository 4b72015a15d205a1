//! Simulation constants and tuning defaults.
//!
//! These are the values `ArenaConfig::default()` starts from.

use glam::DVec3;

// --- Player ---

/// Player spawn position.
pub const PLAYER_START: DVec3 = DVec3::new(0.0, 1.0, 0.0);

/// Player displacement per held key (units per second).
pub const PLAYER_SPEED: f64 = 5.0;

// --- Projectiles ---

/// Projectile speed (units per second). Shared by every projectile.
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Projectiles farther than this from the origin are culled.
pub const CULL_RADIUS: f64 = 50.0;

/// Visual radius of a projectile.
pub const PROJECTILE_RADIUS: f64 = 0.2;

// --- Enemies ---

/// Visual radius of an enemy.
pub const ENEMY_RADIUS: f64 = 0.5;

/// Fixed spawn height of enemies.
pub const ENEMY_HEIGHT: f64 = 1.0;

/// Enemies spawn with x and z drawn from [-SPAWN_EXTENT, SPAWN_EXTENT).
pub const SPAWN_EXTENT: f64 = 10.0;

/// Seconds between enemy spawns.
pub const SPAWN_INTERVAL_SECS: f64 = 3.0;

/// Upper bound on catch-up spawns emitted by a single tick.
pub const MAX_SPAWNS_PER_TICK: u32 = 10;

// --- Collision & scoring ---

/// A projectile hits an enemy when their centres are closer than this.
pub const HIT_RADIUS: f64 = ENEMY_RADIUS + PROJECTILE_RADIUS;

/// Score awarded per hit.
pub const POINTS_PER_HIT: u32 = 10;

// --- Camera ---

/// Fixed camera position; fire direction defaults to its forward vector.
pub const CAMERA_EYE: DVec3 = DVec3::new(0.0, 5.0, 10.0);

/// Point the camera looks at.
pub const CAMERA_TARGET: DVec3 = DVec3::new(0.0, 1.0, 0.0);

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

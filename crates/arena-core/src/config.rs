//! Arena tuning configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the values
//! in `constants`.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration for a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub player_start: DVec3,
    pub player_speed: f64,
    pub projectile_speed: f64,
    pub cull_radius: f64,
    pub hit_radius: f64,
    pub points_per_hit: u32,
    pub spawn_interval_secs: f64,
    pub spawn_extent: f64,
    pub enemy_height: f64,
    pub max_spawns_per_tick: u32,
    pub camera_eye: DVec3,
    pub camera_target: DVec3,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            player_start: PLAYER_START,
            player_speed: PLAYER_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            cull_radius: CULL_RADIUS,
            hit_radius: HIT_RADIUS,
            points_per_hit: POINTS_PER_HIT,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            spawn_extent: SPAWN_EXTENT,
            enemy_height: ENEMY_HEIGHT,
            max_spawns_per_tick: MAX_SPAWNS_PER_TICK,
            camera_eye: CAMERA_EYE,
            camera_target: CAMERA_TARGET,
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("loaded arena config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player_speed", self.player_speed)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("cull_radius", self.cull_radius)?;
        positive("hit_radius", self.hit_radius)?;
        positive("spawn_interval_secs", self.spawn_interval_secs)?;
        positive("spawn_extent", self.spawn_extent)?;
        // Spawn coordinates are sampled from a range of width 2 * extent.
        if !(2.0 * self.spawn_extent).is_finite() {
            return Err(invalid("spawn_extent", "spawn square width overflows"));
        }

        if !self.enemy_height.is_finite() {
            return Err(invalid("enemy_height", "must be finite"));
        }
        if self.max_spawns_per_tick == 0 {
            return Err(invalid("max_spawns_per_tick", "must be at least 1"));
        }
        for (field, v) in [
            ("player_start", self.player_start),
            ("camera_eye", self.camera_eye),
            ("camera_target", self.camera_target),
        ] {
            if !v.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if (self.camera_target - self.camera_eye).try_normalize().is_none() {
            return Err(invalid("camera_target", "must differ from camera_eye"));
        }
        Ok(())
    }

    /// Fire direction used when the host has not supplied an aim:
    /// the camera's forward vector.
    pub fn default_aim(&self) -> DVec3 {
        (self.camera_target - self.camera_eye)
            .try_normalize()
            .unwrap_or(DVec3::NEG_Z)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite and > 0, got {value}")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

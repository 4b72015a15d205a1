//! Arena state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::events::{EntityEvent, HitEvent};
use crate::types::{Handle, SimTime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub player: PlayerView,
    /// Live enemies, in spawn order.
    pub enemies: Vec<EnemyView>,
    /// Live projectiles, in fire order.
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    /// Add/remove notifications produced since the previous snapshot.
    pub entity_events: Vec<EntityEvent>,
    /// Hits scored during this tick.
    pub hits: Vec<HitEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub handle: Handle,
    pub position: DVec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub handle: Handle,
    pub position: DVec3,
    pub direction: DVec3,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub total: u32,
    pub hits: u32,
}

impl ScoreView {
    /// Text shown by the score overlay.
    pub fn label(&self) -> String {
        format!("Score: {}", self.total)
    }
}

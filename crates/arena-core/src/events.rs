//! Notifications emitted by the simulation for the presentation layer.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::RemovalReason;
use crate::types::Handle;

/// Entity add/remove notification.
///
/// The presentation layer creates a visual for every add and destroys it
/// on the matching remove; replaying all notifications in order yields
/// exactly the live entity set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityEvent {
    EnemySpawned {
        handle: Handle,
        position: DVec3,
    },
    EnemyRemoved {
        handle: Handle,
    },
    ProjectileFired {
        handle: Handle,
        position: DVec3,
        direction: DVec3,
    },
    ProjectileRemoved {
        handle: Handle,
        reason: RemovalReason,
    },
}

impl EntityEvent {
    pub fn handle(&self) -> Handle {
        match *self {
            EntityEvent::EnemySpawned { handle, .. }
            | EntityEvent::EnemyRemoved { handle }
            | EntityEvent::ProjectileFired { handle, .. }
            | EntityEvent::ProjectileRemoved { handle, .. } => handle,
        }
    }

    /// True for notifications that create a visual.
    pub fn is_add(&self) -> bool {
        matches!(
            self,
            EntityEvent::EnemySpawned { .. } | EntityEvent::ProjectileFired { .. }
        )
    }
}

/// A scored projectile–enemy collision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    pub projectile: Handle,
    pub enemy: Handle,
    /// Enemy position at the moment of the hit.
    pub position: DVec3,
    /// Score total after this hit.
    pub total: u32,
}

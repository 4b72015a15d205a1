//! Enumeration types used throughout the simulation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Logical movement key. Each maps to one world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    /// Toward -z.
    Forward,
    /// Toward +z.
    Back,
    /// Toward -x.
    Left,
    /// Toward +x.
    Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [
        MoveKey::Forward,
        MoveKey::Back,
        MoveKey::Left,
        MoveKey::Right,
    ];

    /// Integer world axis for this key. Integer so opposite keys cancel exactly.
    pub fn axis(self) -> [i32; 3] {
        match self {
            MoveKey::Forward => [0, 0, -1],
            MoveKey::Back => [0, 0, 1],
            MoveKey::Left => [-1, 0, 0],
            MoveKey::Right => [1, 0, 0],
        }
    }

    /// Unit world axis as a vector.
    pub fn direction(self) -> DVec3 {
        let [x, y, z] = self.axis();
        DVec3::new(x as f64, y as f64, z as f64)
    }

    /// Map a raw key name (`w`, `a`, `s`, `d`, any case) to a movement key.
    pub fn from_key_name(name: &str) -> Option<MoveKey> {
        match name.to_ascii_lowercase().as_str() {
            "w" => Some(MoveKey::Forward),
            "s" => Some(MoveKey::Back),
            "a" => Some(MoveKey::Left),
            "d" => Some(MoveKey::Right),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MoveKey::Forward => 0,
            MoveKey::Back => 1,
            MoveKey::Left => 2,
            MoveKey::Right => 3,
        }
    }
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Struck an enemy.
    Hit,
    /// Travelled past the cull radius.
    Culled,
    /// The session was reset.
    Reset,
}

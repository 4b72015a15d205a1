//! Input events sent from the presentation layer to the simulation.
//!
//! Events are folded into an `InputState`, which is handed to the engine
//! once per tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::MoveKey;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// A movement key went down.
    KeyDown { key: MoveKey },
    /// A movement key was released.
    KeyUp { key: MoveKey },
    /// Fire one projectile along the current aim.
    Fire,
    /// Update the firing orientation (derived from the camera by the host).
    Aim { direction: DVec3 },
}

impl InputEvent {
    /// Translate a raw key event from the host's input callbacks.
    ///
    /// `w`/`a`/`s`/`d` produce key up/down events, a pressed space bar
    /// produces `Fire`. Anything else is not an arena input.
    pub fn from_raw_key(name: &str, pressed: bool) -> Option<InputEvent> {
        if let Some(key) = MoveKey::from_key_name(name) {
            return Some(if pressed {
                InputEvent::KeyDown { key }
            } else {
                InputEvent::KeyUp { key }
            });
        }

        match name {
            " " | "Space" if pressed => Some(InputEvent::Fire),
            _ => None,
        }
    }
}

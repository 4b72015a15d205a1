//! Scripted input for the headless demo.
//!
//! Strafes through the four movement keys and fires on a fixed cadence
//! while sweeping its aim around the ground plane.

use glam::DVec3;

use arena_core::commands::InputEvent;
use arena_core::enums::MoveKey;

/// Seconds each movement key is held.
pub const STRAFE_SECS: f64 = 2.0;

/// Seconds between shots.
pub const FIRE_SECS: f64 = 0.25;

/// Aim rotation per shot (radians).
pub const AIM_STEP: f64 = 0.4;

#[derive(Debug, Default)]
pub struct DemoPilot {
    held: Option<MoveKey>,
    strafe_index: usize,
    next_strafe_at: f64,
    next_fire_at: f64,
    aim_angle: f64,
}

impl DemoPilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events due at `now` seconds into the demo.
    pub fn poll(&mut self, now: f64) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if now >= self.next_strafe_at {
            if let Some(key) = self.held.take() {
                events.push(InputEvent::KeyUp { key });
            }
            let key = MoveKey::ALL[self.strafe_index % MoveKey::ALL.len()];
            self.strafe_index += 1;
            self.held = Some(key);
            self.next_strafe_at = now + STRAFE_SECS;
            events.push(InputEvent::KeyDown { key });
        }

        if now >= self.next_fire_at {
            let direction = DVec3::new(self.aim_angle.sin(), 0.0, -self.aim_angle.cos());
            self.aim_angle += AIM_STEP;
            self.next_fire_at = now + FIRE_SECS;
            events.push(InputEvent::Aim { direction });
            events.push(InputEvent::Fire);
        }

        events
    }
}

//! Per-session input snapshot.
//!
//! The host mutates an `InputState` from its event callbacks and passes it
//! to `SimulationEngine::tick`, which reads held keys and drains fire
//! triggers exactly once.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::commands::InputEvent;
use crate::enums::MoveKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; 4],
    pending_fire: u32,
    aim: Option<DVec3>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: MoveKey) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: MoveKey) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held[key.index()]
    }

    /// Queue one shot. Every trigger yields exactly one projectile.
    pub fn trigger_fire(&mut self) {
        self.pending_fire = self.pending_fire.saturating_add(1);
    }

    /// Number of shots waiting for the next tick.
    pub fn pending_fire(&self) -> u32 {
        self.pending_fire
    }

    /// Drain pending shots.
    pub fn take_fire(&mut self) -> u32 {
        std::mem::take(&mut self.pending_fire)
    }

    /// Set the firing orientation. Zero-length or non-finite vectors are ignored.
    pub fn set_aim(&mut self, direction: DVec3) {
        match direction.try_normalize() {
            Some(dir) => self.aim = Some(dir),
            None => log::warn!("ignoring degenerate aim direction {direction:?}"),
        }
    }

    /// Current aim, if the host has ever supplied one.
    pub fn aim(&self) -> Option<DVec3> {
        self.aim
    }

    /// Sum of the unit axes of every held key.
    ///
    /// Computed in integers so that opposite keys held together cancel to
    /// exactly zero before any scaling.
    pub fn displacement_axis(&self) -> DVec3 {
        let mut sum = [0i32; 3];
        for key in MoveKey::ALL {
            if self.is_held(key) {
                let axis = key.axis();
                for (s, a) in sum.iter_mut().zip(axis) {
                    *s += a;
                }
            }
        }
        DVec3::new(sum[0] as f64, sum[1] as f64, sum[2] as f64)
    }

    /// Release every key and drop pending shots. Aim is kept.
    pub fn clear(&mut self) {
        self.held = [false; 4];
        self.pending_fire = 0;
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } => self.press(key),
            InputEvent::KeyUp { key } => self.release(key),
            InputEvent::Fire => self.trigger_fire(),
            InputEvent::Aim { direction } => self.set_aim(direction),
        }
    }
}

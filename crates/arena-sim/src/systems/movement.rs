//! Kinematic integration system.
//!
//! Moves the player from held keys and propagates projectiles along their
//! fixed headings, culling those that leave the arena.

use arena_core::components::Player;
use arena_core::enums::RemovalReason;
use arena_core::input::InputState;
use arena_core::types::Handle;

use crate::store::EntityStore;

/// Displace the player along the world axes of every held key.
pub fn move_player(player: &mut Player, input: &InputState, speed: f64, delta: f64) {
    let axis = input.displacement_axis();
    if axis == glam::DVec3::ZERO {
        return;
    }
    player.position += axis * (speed * delta);
}

/// Integrate every projectile, then remove those beyond `cull_radius`.
///
/// All positions are updated before any removal, so no projectile misses
/// its update. A position whose length is not a number counts as outside.
/// Returns the culled handles.
pub fn run_projectiles(
    store: &mut EntityStore,
    speed: f64,
    cull_radius: f64,
    delta: f64,
) -> Vec<Handle> {
    store.integrate_projectiles(speed * delta);

    let mut culled = Vec::new();
    store.for_each_projectile(|handle, position, _| {
        let distance = position.length();
        if distance.is_nan() || distance > cull_radius {
            culled.push(handle);
        }
    });

    for &handle in &culled {
        store.remove_projectile(handle, RemovalReason::Culled);
    }
    culled
}

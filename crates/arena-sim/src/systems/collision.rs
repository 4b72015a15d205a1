//! Collision system: pairs projectiles with enemies by proximity.

use arena_core::enums::RemovalReason;
use arena_core::events::HitEvent;

use crate::score::ScoreTracker;
use crate::store::EntityStore;

/// Resolve projectile–enemy hits for this tick.
///
/// Projectiles are visited in fire order and enemies in spawn order. Each
/// projectile takes the first enemy closer than `hit_radius` that no
/// earlier projectile has claimed, so a projectile scores at most once and
/// an enemy is destroyed at most once. Removal happens after the pass.
pub fn run(store: &mut EntityStore, score: &mut ScoreTracker, hit_radius: f64) -> Vec<HitEvent> {
    let projectiles = store.projectiles();
    let enemies = store.enemies();
    if projectiles.is_empty() || enemies.is_empty() {
        return Vec::new();
    }

    let mut claimed = vec![false; enemies.len()];
    let mut pairs = Vec::new();

    for projectile in &projectiles {
        let target = enemies.iter().enumerate().find(|(i, enemy)| {
            !claimed[*i] && projectile.position.distance(enemy.position) < hit_radius
        });

        if let Some((i, enemy)) = target {
            claimed[i] = true;
            pairs.push((projectile.handle, *enemy));
        }
    }

    pairs
        .into_iter()
        .map(|(projectile, enemy)| {
            store.remove_projectile(projectile, RemovalReason::Hit);
            store.remove_enemy(enemy.handle);
            let total = score.record_hit();
            log::debug!(
                "projectile {projectile} hit enemy {} at {}, score {total}",
                enemy.handle,
                enemy.position
            );
            HitEvent {
                projectile,
                enemy: enemy.handle,
                position: enemy.position,
                total,
            }
        })
        .collect()
}

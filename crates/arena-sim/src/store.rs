//! Entity store: owns every live enemy and projectile.
//!
//! Backed by a hecs `World`. Entities are addressed by `Handle`, never by
//! storage position, so removals cannot shift or skip other entities.
//! Every add and remove is recorded as an `EntityEvent` for the
//! presentation layer.

use std::collections::HashMap;

use glam::DVec3;
use hecs::{Entity, World};

use arena_core::components::{Enemy, Position, Projectile};
use arena_core::enums::RemovalReason;
use arena_core::events::EntityEvent;
use arena_core::state::{EnemyView, ProjectileView};
use arena_core::types::Handle;

#[derive(Default)]
pub struct EntityStore {
    world: World,
    index: HashMap<Handle, Entity>,
    next_handle: u64,
    events: Vec<EntityEvent>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> Handle {
        self.next_handle += 1;
        Handle(self.next_handle)
    }

    pub fn add_enemy(&mut self, position: DVec3) -> Handle {
        let handle = self.allocate();
        let entity = self.world.spawn((handle, Position(position), Enemy));
        self.index.insert(handle, entity);
        self.events.push(EntityEvent::EnemySpawned { handle, position });
        log::debug!("enemy {handle} spawned at {position}");
        handle
    }

    /// Add a projectile. `direction` is normalised; a degenerate direction
    /// falls back to -z.
    pub fn add_projectile(&mut self, position: DVec3, direction: DVec3) -> Handle {
        let direction = direction.try_normalize().unwrap_or_else(|| {
            log::warn!("degenerate projectile direction {direction:?}, using -z");
            DVec3::NEG_Z
        });

        let handle = self.allocate();
        let entity = self
            .world
            .spawn((handle, Position(position), Projectile { direction }));
        self.index.insert(handle, entity);
        self.events.push(EntityEvent::ProjectileFired {
            handle,
            position,
            direction,
        });
        log::debug!("projectile {handle} fired from {position} toward {direction}");
        handle
    }

    /// Remove an enemy. Unknown handles and projectile handles are ignored.
    pub fn remove_enemy(&mut self, handle: Handle) -> bool {
        let Some(entity) = self.entity_with::<Enemy>(handle) else {
            return false;
        };
        self.despawn(handle, entity);
        self.events.push(EntityEvent::EnemyRemoved { handle });
        log::debug!("enemy {handle} removed");
        true
    }

    /// Remove a projectile. Unknown handles and enemy handles are ignored.
    pub fn remove_projectile(&mut self, handle: Handle, reason: RemovalReason) -> bool {
        let Some(entity) = self.entity_with::<Projectile>(handle) else {
            return false;
        };
        self.despawn(handle, entity);
        self.events.push(EntityEvent::ProjectileRemoved { handle, reason });
        log::debug!("projectile {handle} removed ({reason:?})");
        true
    }

    fn entity_with<T: hecs::Component>(&self, handle: Handle) -> Option<Entity> {
        let entity = *self.index.get(&handle)?;
        self.world.get::<&T>(entity).is_ok().then_some(entity)
    }

    fn despawn(&mut self, handle: Handle, entity: Entity) {
        self.index.remove(&handle);
        let _ = self.world.despawn(entity);
    }

    /// Live enemies in insertion order.
    pub fn enemies(&self) -> Vec<EnemyView> {
        let mut enemies: Vec<EnemyView> = self
            .world
            .query::<(&Handle, &Position, &Enemy)>()
            .iter()
            .map(|(_, (handle, pos, _))| EnemyView {
                handle: *handle,
                position: pos.0,
            })
            .collect();

        enemies.sort_by_key(|e| e.handle);
        enemies
    }

    /// Live projectiles in insertion order.
    pub fn projectiles(&self) -> Vec<ProjectileView> {
        let mut projectiles: Vec<ProjectileView> = self
            .world
            .query::<(&Handle, &Position, &Projectile)>()
            .iter()
            .map(|(_, (handle, pos, projectile))| ProjectileView {
                handle: *handle,
                position: pos.0,
                direction: projectile.direction,
            })
            .collect();

        projectiles.sort_by_key(|p| p.handle);
        projectiles
    }

    /// Visit every enemy as `(handle, position)`.
    ///
    /// Iterates an ordered snapshot, so callers collect removals and apply
    /// them after the pass.
    pub fn for_each_enemy(&self, mut f: impl FnMut(Handle, DVec3)) {
        for enemy in self.enemies() {
            f(enemy.handle, enemy.position);
        }
    }

    /// Visit every projectile as `(handle, position, direction)`.
    pub fn for_each_projectile(&self, mut f: impl FnMut(Handle, DVec3, DVec3)) {
        for projectile in self.projectiles() {
            f(projectile.handle, projectile.position, projectile.direction);
        }
    }

    /// Advance every projectile by `direction * distance`. Never removes.
    pub fn integrate_projectiles(&mut self, distance: f64) {
        for (_entity, (pos, projectile)) in self.world.query_mut::<(&mut Position, &Projectile)>()
        {
            pos.0 += projectile.direction * distance;
        }
    }

    pub fn position(&self, handle: Handle) -> Option<DVec3> {
        let entity = *self.index.get(&handle)?;
        self.world.get::<&Position>(entity).ok().map(|p| p.0)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.index.contains_key(&handle)
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Remove everything, emitting a notification per entity.
    /// Handles keep counting up so they are never reused.
    pub fn clear(&mut self) {
        for enemy in self.enemies() {
            self.remove_enemy(enemy.handle);
        }
        for projectile in self.projectiles() {
            self.remove_projectile(projectile.handle, RemovalReason::Reset);
        }
    }

    /// Take the notifications recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<EntityEvent> {
        std::mem::take(&mut self.events)
    }
}

//! Presentation-side mirror of the arena.
//!
//! Holds one "visual" per live entity, created and destroyed only from
//! `EntityEvent` notifications, the way a renderer keeps its meshes in sync
//! with the simulation. Positions are refreshed from each snapshot.

use std::collections::HashMap;

use glam::DVec3;

use arena_core::events::EntityEvent;
use arena_core::state::ArenaSnapshot;
use arena_core::types::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Enemy,
    Projectile,
}

#[derive(Debug, Clone, Copy)]
pub struct Visual {
    pub kind: VisualKind,
    pub position: DVec3,
}

#[derive(Debug, Default)]
pub struct SceneMirror {
    visuals: HashMap<Handle, Visual>,
    player: DVec3,
    score_label: String,
}

impl SceneMirror {
    pub fn new() -> Self {
        Self {
            score_label: "Score: 0".to_string(),
            ..Default::default()
        }
    }

    /// Apply one snapshot's notifications, then refresh positions and score.
    pub fn apply(&mut self, snapshot: &ArenaSnapshot) {
        for event in &snapshot.entity_events {
            self.apply_event(event);
        }

        for enemy in &snapshot.enemies {
            if let Some(visual) = self.visuals.get_mut(&enemy.handle) {
                visual.position = enemy.position;
            }
        }
        for projectile in &snapshot.projectiles {
            if let Some(visual) = self.visuals.get_mut(&projectile.handle) {
                visual.position = projectile.position;
            }
        }

        self.player = snapshot.player.position;
        self.score_label = snapshot.score.label();
    }

    fn apply_event(&mut self, event: &EntityEvent) {
        let added = match *event {
            EntityEvent::EnemySpawned { position, .. } => Some(Visual {
                kind: VisualKind::Enemy,
                position,
            }),
            EntityEvent::ProjectileFired { position, .. } => Some(Visual {
                kind: VisualKind::Projectile,
                position,
            }),
            EntityEvent::EnemyRemoved { .. } | EntityEvent::ProjectileRemoved { .. } => None,
        };

        let handle = event.handle();
        match added {
            Some(visual) => {
                if self.visuals.insert(handle, visual).is_some() {
                    log::warn!("visual {handle} created twice");
                }
            }
            None => {
                if self.visuals.remove(&handle).is_none() {
                    log::warn!("remove for unknown visual {handle}");
                }
            }
        }
    }

    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    pub fn count(&self, kind: VisualKind) -> usize {
        self.visuals.values().filter(|v| v.kind == kind).count()
    }

    pub fn visual(&self, handle: Handle) -> Option<&Visual> {
        self.visuals.get(&handle)
    }

    pub fn player(&self) -> DVec3 {
        self.player
    }

    pub fn score_label(&self) -> &str {
        &self.score_label
    }

    /// True when the mirror holds exactly the snapshot's live entities.
    pub fn is_consistent_with(&self, snapshot: &ArenaSnapshot) -> bool {
        let enemies_match = snapshot.enemies.iter().all(|e| {
            self.visuals
                .get(&e.handle)
                .is_some_and(|v| v.kind == VisualKind::Enemy)
        });
        let projectiles_match = snapshot.projectiles.iter().all(|p| {
            self.visuals
                .get(&p.handle)
                .is_some_and(|v| v.kind == VisualKind::Projectile)
        });

        enemies_match
            && projectiles_match
            && self.visuals.len() == snapshot.enemies.len() + snapshot.projectiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::config::ArenaConfig;
    use arena_core::enums::RemovalReason;
    use arena_core::input::InputState;
    use arena_sim::engine::SimulationEngine;

    #[test]
    fn test_mirror_tracks_engine() {
        let mut engine = SimulationEngine::new(ArenaConfig {
            spawn_interval_secs: 0.25,
            ..Default::default()
        })
        .unwrap();
        let mut input = InputState::new();
        let mut scene = SceneMirror::new();

        for i in 0..600 {
            if i % 10 == 0 {
                input.set_aim(glam::DVec3::new((i as f64).sin(), 0.0, (i as f64).cos()));
                input.trigger_fire();
            }
            let snapshot = engine.tick(1.0 / 60.0, &mut input);
            scene.apply(&snapshot);
            assert!(scene.is_consistent_with(&snapshot), "frame {i}");
            assert_eq!(scene.score_label(), snapshot.score.label());
        }

        let snapshot = engine.reset();
        scene.apply(&snapshot);
        assert_eq!(scene.visual_count(), 0);
        assert_eq!(scene.score_label(), "Score: 0");
    }

    #[test]
    fn test_mirror_ignores_unknown_removal() {
        let mut scene = SceneMirror::new();
        let snapshot = ArenaSnapshot {
            entity_events: vec![
                EntityEvent::EnemySpawned {
                    handle: Handle(1),
                    position: DVec3::new(5.0, 1.0, 0.0),
                },
                EntityEvent::ProjectileRemoved {
                    handle: Handle(9),
                    reason: RemovalReason::Culled,
                },
            ],
            ..Default::default()
        };

        scene.apply(&snapshot);
        assert_eq!(scene.visual_count(), 1);
        assert_eq!(scene.count(VisualKind::Enemy), 1);
        assert_eq!(scene.count(VisualKind::Projectile), 0);
        assert_eq!(
            scene.visual(Handle(1)).map(|v| v.position),
            Some(DVec3::new(5.0, 1.0, 0.0))
        );
    }
}

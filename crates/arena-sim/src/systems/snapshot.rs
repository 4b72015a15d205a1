//! Snapshot system: reads the store and builds a complete ArenaSnapshot.

use arena_core::components::Player;
use arena_core::events::HitEvent;
use arena_core::state::*;
use arena_core::types::SimTime;

use crate::score::ScoreTracker;
use crate::store::EntityStore;

/// Build a snapshot, draining the store's pending notifications.
pub fn build_snapshot(
    store: &mut EntityStore,
    player: &Player,
    time: &SimTime,
    score: &ScoreTracker,
    hits: Vec<HitEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        player: PlayerView {
            position: player.position,
        },
        enemies: store.enemies(),
        projectiles: store.projectiles(),
        score: ScoreView {
            total: score.total(),
            hits: score.hits(),
        },
        entity_events: store.drain_events(),
        hits,
    }
}

//! Game loop thread: steps the simulation once per frame at 60 Hz and
//! publishes snapshots.
//!
//! The engine moves into this thread and is never shared. Input arrives via
//! an `mpsc` channel and is folded into a thread-local `InputState`. Every
//! snapshot goes out on a bounded frame channel and the latest one is also
//! stored for synchronous polling. When the host falls behind and the frame
//! channel is full, a frame is dropped but its notifications and hits are
//! carried into the next frame that gets through.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use arena_core::events::{EntityEvent, HitEvent};
use arena_core::input::InputState;
use arena_core::state::{ArenaSnapshot, ScoreView};
use arena_sim::clock::FrameClock;
use arena_sim::engine::SimulationEngine;

use crate::state::{HostCommand, SessionSummary, SharedSnapshot};

/// Nominal frame rate of the host.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Frames queued for the host before further frames are folded together.
pub const FRAME_BUFFER: usize = 2 * FRAME_RATE as usize;

/// Host-side ends of a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<HostCommand>,
    pub frames: mpsc::Receiver<ArenaSnapshot>,
    pub thread: JoinHandle<SessionSummary>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>();
    let (frame_tx, frame_rx) = mpsc::sync_channel::<ArenaSnapshot>(FRAME_BUFFER);

    let thread = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            run_game_loop(
                engine,
                cmd_rx,
                FramePublisher::new(frame_tx, latest_snapshot),
            )
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        frames: frame_rx,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<HostCommand>,
    mut publisher: FramePublisher,
) -> SessionSummary {
    let mut input = InputState::new();
    let mut clock = FrameClock::new();
    let mut frames = 0u64;
    let started = Instant::now();
    let mut next_frame_time = started;

    log::info!("game loop started at {FRAME_RATE} Hz");

    loop {
        // 1. Drain all pending commands
        let mut reset = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(HostCommand::Input(event)) => input.apply(event),
                Ok(HostCommand::Reset) => reset = true,
                Ok(HostCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopping after {frames} frames");
                    return SessionSummary {
                        frames,
                        elapsed_secs: started.elapsed().as_secs_f64(),
                        score: engine_score(&engine),
                    };
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        if reset {
            input.clear();
            publisher.publish(engine.reset());
        }

        // 2. Advance one frame with the measured delta
        let snapshot = engine.step(&mut clock, &mut input);
        frames += 1;

        // 3. Publish
        publisher.publish(snapshot);

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Sends snapshots to the host without blocking the loop.
struct FramePublisher {
    frame_tx: mpsc::SyncSender<ArenaSnapshot>,
    latest_snapshot: SharedSnapshot,
    carried_events: Vec<EntityEvent>,
    carried_hits: Vec<HitEvent>,
}

impl FramePublisher {
    fn new(frame_tx: mpsc::SyncSender<ArenaSnapshot>, latest_snapshot: SharedSnapshot) -> Self {
        Self {
            frame_tx,
            latest_snapshot,
            carried_events: Vec::new(),
            carried_hits: Vec::new(),
        }
    }

    fn publish(&mut self, mut snapshot: ArenaSnapshot) {
        if !self.carried_events.is_empty() {
            self.carried_events.append(&mut snapshot.entity_events);
            snapshot.entity_events = std::mem::take(&mut self.carried_events);
        }
        if !self.carried_hits.is_empty() {
            self.carried_hits.append(&mut snapshot.hits);
            snapshot.hits = std::mem::take(&mut self.carried_hits);
        }

        if let Ok(mut lock) = self.latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        match self.frame_tx.try_send(snapshot) {
            Ok(()) => {}
            Err(mpsc::TrySendError::Full(dropped)) => {
                log::debug!("frame channel full, folding frame into the next one");
                self.carried_events = dropped.entity_events;
                self.carried_hits = dropped.hits;
            }
            // The host may stop listening before it shuts the loop down.
            Err(mpsc::TrySendError::Disconnected(_)) => {}
        }
    }
}

fn engine_score(engine: &SimulationEngine) -> ScoreView {
    ScoreView {
        total: engine.score().total(),
        hits: engine.score().hits(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use arena_core::commands::InputEvent;
    use arena_core::config::ArenaConfig;
    use arena_core::enums::{MoveKey, RemovalReason};
    use arena_core::types::Handle;

    use crate::scene::SceneMirror;

    fn enemy_spawned(raw: u64) -> EntityEvent {
        EntityEvent::EnemySpawned {
            handle: Handle(raw),
            position: glam::DVec3::ZERO,
        }
    }

    fn frame_with(events: Vec<EntityEvent>) -> ArenaSnapshot {
        ArenaSnapshot {
            entity_events: events,
            ..Default::default()
        }
    }

    #[test]
    fn test_commands_reach_engine() {
        let config = ArenaConfig::default();
        let start = config.player_start;
        let engine = SimulationEngine::new(config).unwrap();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(engine, latest.clone()).unwrap();

        handle
            .commands
            .send(HostCommand::Input(InputEvent::KeyDown {
                key: MoveKey::Right,
            }))
            .unwrap();
        handle
            .commands
            .send(HostCommand::Input(InputEvent::Fire))
            .unwrap();
        std::thread::sleep(Duration::from_millis(150));
        handle.commands.send(HostCommand::Reset).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        handle.commands.send(HostCommand::Shutdown).unwrap();

        let summary = handle.thread.join().unwrap();
        assert!(summary.frames > 0);
        assert_eq!(summary.score.total, 0);

        let frames: Vec<ArenaSnapshot> = handle.frames.try_iter().collect();
        let events: Vec<EntityEvent> = frames
            .iter()
            .flat_map(|f| f.entity_events.iter().copied())
            .collect();

        let fired: Vec<Handle> = events
            .iter()
            .filter(|e| matches!(e, EntityEvent::ProjectileFired { .. }))
            .map(|e| e.handle())
            .collect();
        assert_eq!(fired.len(), 1);
        assert!(events.contains(&EntityEvent::ProjectileRemoved {
            handle: fired[0],
            reason: RemovalReason::Reset,
        }));

        // Right was held until the reset, which also released it.
        assert!(frames.iter().any(|f| f.player.position.x > start.x));
        let last = frames.last().unwrap();
        assert_eq!(last.player.position, start);
        assert_eq!(
            latest.lock().unwrap().as_ref().map(|s| s.player.position),
            Some(start)
        );
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let engine = SimulationEngine::new(ArenaConfig {
            spawn_interval_secs: 0.05,
            ..Default::default()
        })
        .unwrap();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(engine, latest.clone()).unwrap();

        handle
            .commands
            .send(HostCommand::Input(InputEvent::KeyDown {
                key: MoveKey::Right,
            }))
            .unwrap();
        handle
            .commands
            .send(HostCommand::Input(InputEvent::Fire))
            .unwrap();
        std::thread::sleep(Duration::from_millis(200));
        handle.commands.send(HostCommand::Reset).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        handle.commands.send(HostCommand::Shutdown).unwrap();

        let summary = handle.thread.join().unwrap();
        assert!(summary.frames > 0);

        let mut scene = SceneMirror::new();
        let mut last = None;
        while let Ok(snapshot) = handle.frames.try_recv() {
            scene.apply(&snapshot);
            assert!(scene.is_consistent_with(&snapshot));
            last = Some(snapshot);
        }
        assert!(last.is_some());
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_full_frame_channel_carries_notifications() {
        let (tx, rx) = mpsc::sync_channel(1);
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let mut publisher = FramePublisher::new(tx, latest.clone());

        publisher.publish(frame_with(vec![enemy_spawned(1)]));
        // Channel full: this frame is held back.
        publisher.publish(frame_with(vec![enemy_spawned(2)]));
        assert_eq!(
            latest.lock().unwrap().as_ref().map(|s| s.entity_events.len()),
            Some(1)
        );

        let first = rx.try_recv().unwrap();
        assert_eq!(first.entity_events, vec![enemy_spawned(1)]);
        assert!(rx.try_recv().is_err());

        publisher.publish(frame_with(vec![enemy_spawned(3)]));
        let merged = rx.try_recv().unwrap();
        assert_eq!(merged.entity_events, vec![enemy_spawned(2), enemy_spawned(3)]);
    }

    #[test]
    fn test_publish_after_host_hangs_up() {
        let (tx, rx) = mpsc::sync_channel(1);
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let mut publisher = FramePublisher::new(tx, latest.clone());
        drop(rx);

        publisher.publish(frame_with(vec![enemy_spawned(1)]));
        assert!(latest.lock().unwrap().is_some());
    }
}

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use arena_app::error::AppError;
use arena_app::game_loop::spawn_game_loop;
use arena_app::pilot::DemoPilot;
use arena_app::scene::{SceneMirror, VisualKind};
use arena_app::state::{HostCommand, SharedSnapshot};
use arena_core::config::ArenaConfig;
use arena_sim::engine::SimulationEngine;

/// How long the headless demo runs.
const DEMO_DURATION: Duration = Duration::from_secs(20);

/// Host polling period for input and frames.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    let engine = SimulationEngine::new(config)?;

    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let handle = spawn_game_loop(engine, latest.clone())?;

    let mut pilot = DemoPilot::new();
    let mut scene = SceneMirror::new();
    let mut last_label = String::new();
    let started = Instant::now();

    while started.elapsed() < DEMO_DURATION {
        for event in pilot.poll(started.elapsed().as_secs_f64()) {
            handle
                .commands
                .send(HostCommand::Input(event))
                .map_err(|_| AppError::LoopStopped)?;
        }

        while let Ok(snapshot) = handle.frames.try_recv() {
            scene.apply(&snapshot);
        }
        if scene.score_label() != last_label {
            last_label = scene.score_label().to_string();
            log::info!("{last_label}");
        }

        std::thread::sleep(POLL_INTERVAL);
    }

    // The loop may already be gone; joining reports why.
    let _ = handle.commands.send(HostCommand::Shutdown);
    let summary = handle.thread.join().map_err(|_| AppError::LoopPanicked)?;
    while let Ok(snapshot) = handle.frames.try_recv() {
        scene.apply(&snapshot);
    }

    let final_frame = latest
        .lock()
        .ok()
        .and_then(|slot| slot.as_ref().map(|s| (s.time.elapsed_secs, s.score.label())));
    if let Some((elapsed, label)) = final_frame {
        log::info!("final frame at {elapsed:.2}s simulated, {label}");
    }

    log::info!(
        "demo finished: {} ({} hits) over {} frames in {:.1}s; {} enemies and {} projectiles on screen",
        summary.score.total,
        summary.score.hits,
        summary.frames,
        summary.elapsed_secs,
        scene.count(VisualKind::Enemy),
        scene.count(VisualKind::Projectile),
    );
    Ok(())
}

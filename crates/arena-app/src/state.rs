//! Types shared between the host's main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use arena_core::commands::InputEvent;
use arena_core::state::{ArenaSnapshot, ScoreView};

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone)]
pub enum HostCommand {
    /// An input event to fold into the loop's `InputState`.
    Input(InputEvent),
    /// Start a fresh session.
    Reset,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, for synchronous polling. Written after each complete tick.
pub type SharedSnapshot = Arc<Mutex<Option<ArenaSnapshot>>>;

/// What the game loop reports when it exits.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub score: ScoreView,
}

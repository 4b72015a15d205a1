//! Host-level errors.

use arena_core::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to start game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("game loop stopped unexpectedly")]
    LoopStopped,

    #[error("game loop thread panicked")]
    LoopPanicked,
}

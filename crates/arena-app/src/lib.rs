//! ARENA headless host.
//!
//! Runs the simulation on a game-loop thread, forwards input to it over a
//! channel, and mirrors the presentation boundary the way a renderer would.

pub mod error;
pub mod game_loop;
pub mod pilot;
pub mod scene;
pub mod state;

pub use arena_core as core;

//! Simulation engine for ARENA.
//!
//! Owns the hecs-backed entity store, runs systems once per frame,
//! and produces ArenaSnapshots for the presentation layer.

pub mod clock;
pub mod engine;
pub mod score;
pub mod store;
pub mod systems;

pub use arena_core as core;
pub use engine::SimulationEngine;

//! Systems that operate on the entity store each tick.
//!
//! Systems are plain functions (or, for the spawner, a small state
//! machine). They never hold entity data themselves; all entity state
//! lives in the store.

pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;

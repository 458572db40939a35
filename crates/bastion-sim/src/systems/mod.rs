//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. World state lives in components, round and score
//! state lives in [`crate::round::GameState`].

pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod snapshot;
pub mod spawner;

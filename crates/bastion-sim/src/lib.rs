//! Simulation engine for BASTION.
//!
//! Owns the hecs ECS world, runs the per-frame systems, tracks round and
//! score state, and produces `GameStateSnapshot`s for the renderer.

pub mod config;
pub mod engine;
pub mod round;
pub mod systems;
pub mod world_setup;

pub use bastion_core as core;
pub use config::SimConfig;
pub use engine::SimulationEngine;

//! Bastion headless driver.
//!
//! Wires the simulation engine to a frame-paced game loop and an autopilot
//! player, for soak runs, balancing and replaying seeds from the command line.

pub mod autopilot;
pub mod error;
pub mod game_loop;

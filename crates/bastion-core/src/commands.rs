//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire an interceptor at a viewport coordinate.
    Fire { x: f64, y: f64 },
    /// Start (or restart) a game sized to the given viewport.
    StartNewGame {
        viewport_width: f64,
        viewport_height: f64,
    },
    /// Leave the round summary and begin the next round.
    AdvanceRound,
}

impl PlayerCommand {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::Fire { .. } => "fire",
            PlayerCommand::StartNewGame { .. } => "start_new_game",
            PlayerCommand::AdvanceRound => "advance_round",
        }
    }
}

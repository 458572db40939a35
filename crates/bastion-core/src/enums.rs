//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). Only `Playing` is simulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing spawned yet.
    #[default]
    Start,
    Playing,
    /// Round quota cleared, waiting for `advance_round`.
    RoundEnd,
    Win,
    GameOver,
}

impl GamePhase {
    /// Phases from which a fresh game may be started.
    pub fn accepts_new_game(self) -> bool {
        matches!(self, GamePhase::Start | GamePhase::Win | GamePhase::GameOver)
    }
}

/// Kind of a defended ground structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    City,
    Turret,
}

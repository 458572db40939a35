//! Game state snapshot: the complete visible state handed to the renderer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::types::{Position, SimClock, Viewport};

/// Opaque, never-reused identity of a simulated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Complete game state broadcast to the renderer and HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimClock,
    pub phase: GamePhase,
    pub viewport: Option<Viewport>,
    pub score: u32,
    pub round: u32,
    pub round_stats: RoundView,
    pub cities: Vec<CityView>,
    pub turrets: Vec<TurretView>,
    pub enemies: Vec<EnemyView>,
    pub interceptors: Vec<InterceptorView>,
    pub explosions: Vec<ExplosionView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityView {
    pub id: EntityId,
    pub position: Position,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretView {
    pub id: EntityId,
    pub position: Position,
    pub destroyed: bool,
    pub missiles: u32,
    pub max_missiles: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Position,
    pub target: Position,
    pub progress: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: EntityId,
    pub position: Position,
    pub start: Position,
    pub target: Position,
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: EntityId,
    pub position: Position,
    pub radius: f64,
    pub max_radius: f64,
    pub shrinking: bool,
}

/// Per-round counters for the HUD and round summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub spawned: u32,
    pub quota: u32,
    /// Enemies destroyed by explosions this round.
    pub destroyed: u32,
    /// Enemies that reached their target this round.
    pub impacts: u32,
    pub interceptors_launched: u32,
    /// Bonus awarded when the round completed (0 while playing).
    pub bonus: u32,
}

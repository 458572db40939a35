//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::StructureKind;
use crate::state::EntityId;
use crate::types::Position;

/// Discrete things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new enemy entered at the top edge.
    EnemySpawned { id: EntityId, target: Position },
    /// A turret launched an interceptor.
    InterceptorLaunched {
        turret: EntityId,
        target: Position,
        missiles_left: u32,
    },
    /// An interceptor reached its point and a blast started.
    Detonation { position: Position },
    /// An enemy was caught in a blast.
    EnemyDestroyed { id: EntityId, points: u32 },
    /// An enemy reached its target.
    StructureDestroyed { id: EntityId, kind: StructureKind },
    /// The round quota was cleared.
    RoundComplete { round: u32, bonus: u32 },
    Victory { score: u32 },
    Defeat { round: u32, score: u32 },
}

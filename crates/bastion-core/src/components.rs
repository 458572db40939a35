//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Every entity carries a
//! [`crate::types::Position`] plus exactly one of the components below,
//! which decides the collection it belongs to.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// A city on the ground line. Never removed, only flagged destroyed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct City {
    pub destroyed: bool,
}

/// A missile launch platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    pub destroyed: bool,
    /// Missiles currently loaded.
    pub missiles: u32,
    /// Ammo cap restored at the start of every round.
    pub max_missiles: u32,
}

/// A descending enemy projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Position of the structure this projectile was aimed at when spawned.
    pub target: Position,
    /// Fraction of the path travelled, 0.0 at spawn, arrived at >= 1.0.
    pub progress: f64,
    /// Progress gained per nominal frame.
    pub speed: f64,
}

/// A player-fired interceptor flying toward a chosen point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor {
    /// Launching turret position.
    pub start: Position,
    /// Player-chosen detonation point.
    pub target: Position,
    pub progress: f64,
    pub speed: f64,
}

/// An expanding then contracting blast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: f64,
    pub max_radius: f64,
    /// Radius gained per nominal frame while growing.
    pub growth_rate: f64,
    pub shrinking: bool,
}

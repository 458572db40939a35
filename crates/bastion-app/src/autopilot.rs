//! Autopilot: a stand-in player that shoots down incoming enemies.
//!
//! Each frame it picks the lowest enemy it has not already engaged and aims
//! at where that enemy will be once the interceptor has arrived and its
//! blast has started to grow.

use std::collections::HashSet;

use bastion_core::constants::ENEMY_CURVE_EPSILON;
use bastion_core::state::{EnemyView, EntityId};
use bastion_core::types::Position;
use bastion_sim::SimulationEngine;

/// Frames a fresh blast needs before it reliably covers its center.
const BLAST_LEAD_FRAMES: u32 = 2;

#[derive(Debug, Default)]
pub struct Autopilot {
    engaged: HashSet<EntityId>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next aim point, if any enemy is worth a shot.
    pub fn aim(&mut self, engine: &SimulationEngine) -> Option<Position> {
        let enemies = engine.enemies();
        self.engaged
            .retain(|id| enemies.iter().any(|enemy| enemy.id == *id));

        let lead = lead_frames(engine.rules().interceptor_speed);
        let enemy = enemies
            .iter()
            .filter(|enemy| !self.engaged.contains(&enemy.id))
            .filter(|enemy| enemy.progress + enemy.speed * f64::from(lead) < 1.0)
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

        self.engaged.insert(enemy.id);
        Some(project(enemy, lead))
    }

    pub fn reset(&mut self) {
        self.engaged.clear();
    }
}

/// Nominal frames from the fire command until the blast is wide enough.
pub fn lead_frames(interceptor_speed: f64) -> u32 {
    if interceptor_speed <= 0.0 || !interceptor_speed.is_finite() {
        return 0;
    }
    (1.0 / interceptor_speed).ceil() as u32 + BLAST_LEAD_FRAMES
}

/// Where `enemy` will be after `frames` ticks of one nominal frame each.
///
/// Replays the engine's curved approach step for step.
pub fn project(enemy: &EnemyView, frames: u32) -> Position {
    let mut position = enemy.position;
    let mut progress = enemy.progress;
    for _ in 0..frames {
        if progress >= 1.0 {
            break;
        }
        let step = (enemy.speed / (1.0 - progress + ENEMY_CURVE_EPSILON)).min(1.0);
        position = position.lerp(&enemy.target, step);
        progress += enemy.speed;
    }
    position
}

#[cfg(test)]
mod tests {
    use bastion_sim::SimConfig;

    use super::*;

    fn enemy(id: u64, y: f64, progress: f64) -> EnemyView {
        EnemyView {
            id: EntityId(id),
            position: Position::new(100.0, y),
            target: Position::new(300.0, 560.0),
            progress,
            speed: 0.0026,
        }
    }

    #[test]
    fn lead_covers_flight_and_blast_growth() {
        assert_eq!(lead_frames(0.05), 22);
        assert_eq!(lead_frames(0.0), 0);
    }

    #[test]
    fn projection_moves_toward_target() {
        let e = enemy(1, 0.0, 0.0);
        let projected = project(&e, 22);
        assert!(projected.distance_to(&e.target) < e.position.distance_to(&e.target));
        assert_eq!(project(&e, 0), e.position);
    }

    #[test]
    fn projection_stops_at_arrival() {
        // Progress passes 1.0 after 385 frames at this speed.
        let e = enemy(1, 0.0, 0.0);
        let landed = project(&e, 500);
        assert!(landed.distance_to(&e.target) < 10.0);
        assert_eq!(project(&e, 1000), landed);

        let nearly = enemy(2, 0.0, 0.999);
        assert_eq!(project(&nearly, 50), project(&nearly, 1));
    }

    #[test]
    fn engages_each_enemy_once() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.start_new_game(800.0, 600.0).unwrap();
        let mut autopilot = Autopilot::new();
        assert!(autopilot.aim(&engine).is_none());

        // First spawn lands on tick 73.
        for _ in 0..73 {
            engine.tick(1.0);
        }
        assert_eq!(engine.enemies().len(), 1);
        assert!(autopilot.aim(&engine).is_some());
        assert!(autopilot.aim(&engine).is_none());
    }
}

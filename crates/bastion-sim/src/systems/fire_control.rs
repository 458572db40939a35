//! Fire control: turns a player point into an interceptor launch.
//!
//! The launching turret is the eligible one (standing, with ammo) closest to
//! the point horizontally. Turrets sit on the ground line, so height is ignored.

use hecs::{Entity, World};

use bastion_core::components::Turret;
use bastion_core::error::CommandError;
use bastion_core::rules::GameRules;
use bastion_core::types::Position;

use crate::world_setup;

/// A successful launch.
#[derive(Debug, Clone, Copy)]
pub struct Launch {
    pub turret: Entity,
    pub interceptor: Entity,
    pub missiles_left: u32,
}

/// The eligible turret nearest to `point` on the x axis. Ties keep the first found.
pub fn select_turret(world: &World, point: &Position) -> Option<(Entity, Position)> {
    let mut best: Option<(Entity, Position, f64)> = None;
    for (entity, (pos, turret)) in world.query::<(&Position, &Turret)>().iter() {
        if turret.destroyed || turret.missiles == 0 {
            continue;
        }
        let distance = pos.horizontal_distance_to(point);
        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((entity, *pos, distance));
        }
    }
    best.map(|(entity, pos, _)| (entity, pos))
}

/// Fire at `point`.
///
/// Non-finite points are rejected before any turret is touched. `Ok(None)`
/// means no turret was eligible and nothing changed.
pub fn fire(
    world: &mut World,
    point: Position,
    rules: &GameRules,
) -> Result<Option<Launch>, CommandError> {
    if !point.is_finite() {
        return Err(CommandError::NonFinitePoint {
            x: point.x,
            y: point.y,
        });
    }

    let Some((turret_entity, start)) = select_turret(world, &point) else {
        return Ok(None);
    };

    let missiles_left = match world.get::<&mut Turret>(turret_entity) {
        Ok(mut turret) => {
            turret.missiles -= 1;
            turret.missiles
        }
        Err(_) => return Ok(None),
    };

    let interceptor =
        world_setup::spawn_interceptor(world, start, point, rules.interceptor_speed);

    Ok(Some(Launch {
        turret: turret_entity,
        interceptor,
        missiles_left,
    }))
}

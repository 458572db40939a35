//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the ground structures for a new game and the dynamic actors
//! (enemies, interceptors, explosions) with their component bundles.

use hecs::{Entity, World};

use bastion_core::components::*;
use bastion_core::constants::*;
use bastion_core::rules::GameRules;
use bastion_core::state::EntityId;
use bastion_core::types::{Position, Viewport};

/// Stable identity exposed to collaborators.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Empty the world and lay out cities and turrets along the ground line.
///
/// Entities are despawned one by one rather than with `World::clear`, which
/// would reset the allocator and hand out ids from the previous game again.
pub fn setup_game(world: &mut World, viewport: &Viewport, rules: &GameRules) {
    let stale: Vec<Entity> = world.iter().map(|entity| entity.entity()).collect();
    for entity in stale {
        let _ = world.despawn(entity);
    }
    let ground_y = viewport.ground_y();

    for rel_x in CITY_RELATIVE_X {
        world.spawn((
            Position::new(viewport.width * rel_x, ground_y),
            City { destroyed: false },
        ));
    }

    for (rel_x, capacity) in TURRET_RELATIVE_X.into_iter().zip(rules.turret_capacity) {
        world.spawn((
            Position::new(viewport.width * rel_x, ground_y),
            Turret {
                destroyed: false,
                missiles: capacity,
                max_missiles: capacity,
            },
        ));
    }
}

/// Spawn an enemy at `origin` aimed at `target`.
pub fn spawn_enemy(
    world: &mut World,
    origin: Position,
    target: Position,
    speed: f64,
) -> Entity {
    world.spawn((
        origin,
        Enemy {
            target,
            progress: 0.0,
            speed,
        },
    ))
}

/// Spawn an interceptor leaving `start` toward `target`.
pub fn spawn_interceptor(
    world: &mut World,
    start: Position,
    target: Position,
    speed: f64,
) -> Entity {
    world.spawn((
        start,
        Interceptor {
            start,
            target,
            progress: 0.0,
            speed,
        },
    ))
}

/// Spawn a zero-radius blast at `position`.
pub fn spawn_explosion(world: &mut World, position: Position, rules: &GameRules) -> Entity {
    world.spawn((
        position,
        Explosion {
            radius: 0.0,
            max_radius: rules.explosion_max_radius,
            growth_rate: rules.explosion_growth_rate,
            shrinking: false,
        },
    ))
}

/// Remove every enemy, interceptor and explosion. Structures are kept.
pub fn clear_dynamic(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Enemy>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Interceptor>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Explosion>().into_iter().map(|(e, _)| e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Repair every turret and refill it to capacity. Cities are left alone.
pub fn replenish_turrets(world: &mut World) {
    for (_entity, turret) in world.query_mut::<&mut Turret>() {
        turret.destroyed = false;
        turret.missiles = turret.max_missiles;
    }
}

//! Collision resolution: enemy arrivals, blast kills and round completion.
//!
//! Runs after movement each tick in this order. Once the game leaves
//! `Playing` the later passes are skipped by the engine.

use hecs::{Entity, World};
use tracing::debug;

use bastion_core::components::{City, Enemy, Explosion, Turret};
use bastion_core::enums::StructureKind;
use bastion_core::events::GameEvent;
use bastion_core::rules::GameRules;
use bastion_core::types::Position;

use crate::round::GameState;
use crate::world_setup::entity_id;

/// Remove every enemy whose progress reached 1 and destroy the structure it
/// was aimed at. Losing the last turret ends the game.
pub fn resolve_arrivals(
    world: &mut World,
    state: &mut GameState,
    rules: &GameRules,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();
    let mut impacts = Vec::new();
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.progress >= 1.0 {
            despawn_buffer.push(entity);
            impacts.push(enemy.target);
        }
    }
    if impacts.is_empty() {
        return;
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for target in impacts {
        state.round.impacts += 1;
        match destroy_structure_at(world, &target, rules.impact_match_epsilon) {
            Some((entity, kind)) => {
                debug!(?kind, x = target.x, "Structure destroyed");
                events.push(GameEvent::StructureDestroyed {
                    id: entity_id(entity),
                    kind,
                });
            }
            None => debug!(x = target.x, y = target.y, "Impact with no standing structure"),
        }
    }

    if all_turrets_destroyed(world) {
        state.defeat(events);
    }
}

/// Mark the first standing city, else turret, at `target` as destroyed.
fn destroy_structure_at(
    world: &mut World,
    target: &Position,
    epsilon: f64,
) -> Option<(Entity, StructureKind)> {
    for (entity, (pos, city)) in world.query_mut::<(&Position, &mut City)>() {
        if pos.matches(target, epsilon) {
            if city.destroyed {
                return None;
            }
            city.destroyed = true;
            return Some((entity, StructureKind::City));
        }
    }
    for (entity, (pos, turret)) in world.query_mut::<(&Position, &mut Turret)>() {
        if pos.matches(target, epsilon) {
            if turret.destroyed {
                return None;
            }
            turret.destroyed = true;
            return Some((entity, StructureKind::Turret));
        }
    }
    None
}

pub fn all_turrets_destroyed(world: &World) -> bool {
    let mut query = world.query::<&Turret>();
    let mut turrets = query.iter().peekable();
    turrets.peek().is_some() && turrets.all(|(_e, turret)| turret.destroyed)
}

/// Destroy every enemy strictly inside a live blast and score it.
///
/// An enemy caught by several blasts is counted once.
pub fn resolve_blasts(
    world: &mut World,
    state: &mut GameState,
    rules: &GameRules,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let blasts: Vec<(Position, f64)> = world
        .query::<(&Position, &Explosion)>()
        .iter()
        .filter(|(_e, (_pos, explosion))| explosion.radius > 0.0)
        .map(|(_e, (pos, explosion))| (*pos, explosion.radius))
        .collect();
    if blasts.is_empty() {
        return;
    }

    despawn_buffer.clear();
    for (entity, (pos, _enemy)) in world.query::<(&Position, &Enemy)>().iter() {
        if blasts
            .iter()
            .any(|(center, radius)| pos.distance_to(center) < *radius)
        {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        state.round.destroyed += 1;
        events.push(GameEvent::EnemyDestroyed {
            id: entity_id(entity),
            points: rules.kill_points,
        });
        state.award(rules.kill_points, rules, events);
    }
}

/// Bonus for the missiles left in standing turrets.
pub fn round_bonus(world: &World, rules: &GameRules) -> u32 {
    let missiles: u32 = world
        .query::<&Turret>()
        .iter()
        .filter(|(_e, turret)| !turret.destroyed)
        .map(|(_e, turret)| turret.missiles)
        .sum();
    missiles.saturating_mul(rules.missile_bonus_points)
}

/// End the round once the quota is spent and the sky is clear.
pub fn check_round_complete(
    world: &World,
    state: &mut GameState,
    rules: &GameRules,
    events: &mut Vec<GameEvent>,
) {
    if !state.is_playing() || !state.round.quota_met() {
        return;
    }
    let enemies_left = world.query::<&Enemy>().iter().next().is_some();
    let explosions_left = world.query::<&Explosion>().iter().next().is_some();
    if enemies_left || explosions_left {
        return;
    }
    let bonus = round_bonus(world, rules);
    state.complete_round(bonus, rules, events);
}

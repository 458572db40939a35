//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use bastion_core::components::*;
use bastion_core::state::*;
use bastion_core::types::{Position, SimClock, Viewport};

use crate::round::GameState;
use crate::world_setup::entity_id;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimClock,
    viewport: Option<Viewport>,
    state: &GameState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase: state.phase,
        viewport,
        score: state.score,
        round: state.round.round,
        round_stats: state.round.view(),
        cities: build_cities(world),
        turrets: build_turrets(world),
        enemies: build_enemies(world),
        interceptors: build_interceptors(world),
        explosions: build_explosions(world),
    }
}

/// Cities, left to right.
pub fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&Position, &City)>()
        .iter()
        .map(|(entity, (pos, city))| CityView {
            id: entity_id(entity),
            position: *pos,
            destroyed: city.destroyed,
        })
        .collect();

    cities.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    cities
}

/// Turrets, left to right.
pub fn build_turrets(world: &World) -> Vec<TurretView> {
    let mut turrets: Vec<TurretView> = world
        .query::<(&Position, &Turret)>()
        .iter()
        .map(|(entity, (pos, turret))| TurretView {
            id: entity_id(entity),
            position: *pos,
            destroyed: turret.destroyed,
            missiles: turret.missiles,
            max_missiles: turret.max_missiles,
        })
        .collect();

    turrets.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    turrets
}

pub fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| EnemyView {
            id: entity_id(entity),
            position: *pos,
            target: enemy.target,
            progress: enemy.progress,
            speed: enemy.speed,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

pub fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&Position, &Interceptor)>()
        .iter()
        .map(|(entity, (pos, interceptor))| InterceptorView {
            id: entity_id(entity),
            position: *pos,
            start: interceptor.start,
            target: interceptor.target,
            progress: interceptor.progress,
        })
        .collect();

    interceptors.sort_by_key(|i| i.id);
    interceptors
}

pub fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&Position, &Explosion)>()
        .iter()
        .map(|(entity, (pos, explosion))| ExplosionView {
            id: entity_id(entity),
            position: *pos,
            radius: explosion.radius,
            max_radius: explosion.max_radius,
            shrinking: explosion.shrinking,
        })
        .collect();

    explosions.sort_by_key(|e| e.id);
    explosions
}

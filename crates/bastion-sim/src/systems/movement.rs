//! Motion system: enemies, explosions, then interceptors.
//!
//! Explosions are advanced before interceptors so a blast spawned by an
//! arriving interceptor starts at radius 0 on the tick it appears.

use hecs::{Entity, World};

use bastion_core::components::{Enemy, Explosion, Interceptor};
use bastion_core::constants::{ENEMY_CURVE_EPSILON, EXPLOSION_SHRINK_FACTOR};
use bastion_core::events::GameEvent;
use bastion_core::rules::GameRules;
use bastion_core::types::Position;

use crate::world_setup;

/// Advance every moving actor by `dt` nominal frames.
pub fn run(
    world: &mut World,
    rules: &GameRules,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    advance_enemies(world, dt);
    advance_explosions(world, dt, despawn_buffer);
    advance_interceptors(world, rules, dt, despawn_buffer, events);
}

/// Curved approach: the step toward the target grows as progress nears 1.
///
/// Arrival (progress >= 1) is resolved by the collision system.
pub fn advance_enemies(world: &mut World, dt: f64) {
    for (_entity, (pos, enemy)) in world.query_mut::<(&mut Position, &mut Enemy)>() {
        let advance = enemy.speed * dt;
        let step = (advance / (1.0 - enemy.progress + ENEMY_CURVE_EPSILON)).min(1.0);
        *pos = pos.lerp(&enemy.target, step);
        enemy.progress += advance;
    }
}

/// Grow to max radius, then shrink at half rate; despawn once fully shrunk.
pub fn advance_explosions(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        if explosion.shrinking {
            let shrink = explosion.growth_rate * EXPLOSION_SHRINK_FACTOR * dt;
            explosion.radius = (explosion.radius - shrink).max(0.0);
            if explosion.radius <= 0.0 {
                despawn_buffer.push(entity);
            }
        } else {
            explosion.radius += explosion.growth_rate * dt;
            if explosion.radius >= explosion.max_radius {
                explosion.radius = explosion.max_radius;
                explosion.shrinking = true;
            }
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Straight-line flight; on arrival the interceptor becomes an explosion at its target.
pub fn advance_interceptors(
    world: &mut World,
    rules: &GameRules,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();
    let mut detonations = Vec::new();
    for (entity, (pos, interceptor)) in world.query_mut::<(&mut Position, &mut Interceptor)>() {
        interceptor.progress += interceptor.speed * dt;
        if interceptor.progress >= 1.0 {
            despawn_buffer.push(entity);
            detonations.push(interceptor.target);
        } else {
            *pos = interceptor.start.lerp(&interceptor.target, interceptor.progress);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    for position in detonations {
        world_setup::spawn_explosion(world, position, rules);
        events.push(GameEvent::Detonation { position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(world: &mut World, dt: f64) -> Vec<GameEvent> {
        let mut buffer = Vec::new();
        let mut events = Vec::new();
        run(world, &GameRules::default(), dt, &mut buffer, &mut events);
        events
    }

    #[test]
    fn enemy_closes_in_monotonically() {
        let mut world = World::new();
        let target = Position::new(300.0, 560.0);
        let e = world_setup::spawn_enemy(&mut world, Position::new(50.0, 0.0), target, 0.0026);

        let mut last = f64::INFINITY;
        for _ in 0..380 {
            step(&mut world, 1.0);
            let pos = *world.get::<&Position>(e).unwrap();
            let distance = pos.distance_to(&target);
            assert!(distance <= last);
            last = distance;
        }
        let enemy = world.get::<&Enemy>(e).unwrap();
        assert!(enemy.progress < 1.0);
        // Near the end of its flight the curved step has carried it most of the way.
        assert!(last < 50.0, "distance {last}");
    }

    #[test]
    fn enemy_step_uses_progress_before_increment() {
        let mut world = World::new();
        let e = world_setup::spawn_enemy(
            &mut world,
            Position::new(0.0, 0.0),
            Position::new(0.0, 101.0),
            0.01,
        );
        step(&mut world, 1.0);

        // step = 0.01 / (1 - 0 + 0.01) = 1/101
        let pos = *world.get::<&Position>(e).unwrap();
        assert!((pos.y - 1.0).abs() < 1e-9);
        assert!((world.get::<&Enemy>(e).unwrap().progress - 0.01).abs() < 1e-12);
    }

    #[test]
    fn enemy_step_never_overshoots() {
        let mut world = World::new();
        let target = Position::new(10.0, 500.0);
        let e = world_setup::spawn_enemy(&mut world, Position::new(400.0, 0.0), target, 0.5);
        step(&mut world, 4.0);
        assert_eq!(*world.get::<&Position>(e).unwrap(), target);
    }

    #[test]
    fn interceptor_moves_linearly() {
        let mut world = World::new();
        let e = world_setup::spawn_interceptor(
            &mut world,
            Position::new(100.0, 500.0),
            Position::new(200.0, 100.0),
            0.05,
        );
        for _ in 0..10 {
            step(&mut world, 1.0);
        }
        let pos = *world.get::<&Position>(e).unwrap();
        assert!((pos.x - 150.0).abs() < 1e-9);
        assert!((pos.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn interceptor_arrival_spawns_one_explosion_at_target() {
        let mut world = World::new();
        let target = Position::new(200.0, 100.0);
        world_setup::spawn_interceptor(&mut world, Position::new(100.0, 500.0), target, 0.05);

        let mut detonations = 0;
        for _ in 0..40 {
            detonations += step(&mut world, 1.0)
                .iter()
                .filter(|e| matches!(e, GameEvent::Detonation { .. }))
                .count();
        }
        assert_eq!(detonations, 1);
        assert_eq!(world.query::<&Interceptor>().iter().count(), 0);
    }

    #[test]
    fn fresh_explosion_is_not_advanced_on_its_first_tick() {
        let mut world = World::new();
        let target = Position::new(200.0, 100.0);
        world_setup::spawn_interceptor(&mut world, Position::new(100.0, 500.0), target, 1.0);
        step(&mut world, 1.0);

        let mut query = world.query::<(&Position, &Explosion)>();
        let (_e, (pos, explosion)) = query.iter().next().unwrap();
        assert_eq!(*pos, target);
        assert_eq!(explosion.radius, 0.0);
        assert!(!explosion.shrinking);
    }

    #[test]
    fn explosion_grows_then_shrinks_then_disappears() {
        let mut world = World::new();
        let rules = GameRules::default();
        let e = world_setup::spawn_explosion(&mut world, Position::new(0.0, 0.0), &rules);

        let mut radii = Vec::new();
        for _ in 0..200 {
            step(&mut world, 1.0);
            match world.get::<&Explosion>(e) {
                Ok(explosion) => {
                    assert!(explosion.radius >= 0.0);
                    assert!(explosion.radius <= explosion.max_radius);
                    radii.push(explosion.radius);
                }
                Err(_) => break,
            }
        }
        assert!(!world.contains(e));

        let peak = radii
            .iter()
            .position(|r| *r == rules.explosion_max_radius)
            .unwrap();
        assert!(radii[..=peak].windows(2).all(|w| w[0] < w[1]));
        assert!(radii[peak..].windows(2).all(|w| w[0] > w[1]));
        // 27 frames up (clamped at 40), then 54 frames down at 0.75 per frame.
        assert_eq!(peak, 26);
    }
}

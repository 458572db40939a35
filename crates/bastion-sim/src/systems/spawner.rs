//! Enemy spawning system. Drips enemies in at a round-dependent interval.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use bastion_core::components::{City, Turret};
use bastion_core::events::GameEvent;
use bastion_core::rules::GameRules;
use bastion_core::types::{Position, Viewport};

use crate::round::RoundState;
use crate::world_setup::{self, entity_id};

/// Positions of every city and turret that is still standing.
pub fn live_targets(world: &World) -> Vec<Position> {
    let mut targets: Vec<Position> = world
        .query::<(&Position, &City)>()
        .iter()
        .filter(|(_e, (_pos, city))| !city.destroyed)
        .map(|(_e, (pos, _city))| *pos)
        .collect();
    targets.extend(
        world
            .query::<(&Position, &Turret)>()
            .iter()
            .filter(|(_e, (_pos, turret))| !turret.destroyed)
            .map(|(_e, (pos, _turret))| *pos),
    );
    targets
}

/// Accumulate `dt` and spawn one enemy each time the interval elapses,
/// until the round quota is reached.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    round: &mut RoundState,
    rules: &GameRules,
    viewport: &Viewport,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    if round.quota_met() {
        return;
    }

    round.spawn_timer += dt;
    if round.spawn_timer <= rules.spawn_interval(round.round) {
        return;
    }
    round.spawn_timer = 0.0;

    let targets = live_targets(world);
    if targets.is_empty() {
        // Nothing left to aim at; the quota stays unspent.
        debug!(round = round.round, "No live targets, spawn skipped");
        return;
    }

    let target = targets[rng.gen_range(0..targets.len())];
    let origin = Position::new(rng.gen_range(0.0..viewport.width), 0.0);
    let speed = rules.enemy_speed(round.round);
    let entity = world_setup::spawn_enemy(world, origin, target, speed);
    round.spawned += 1;

    debug!(
        round = round.round,
        spawned = round.spawned,
        quota = round.quota,
        x = origin.x,
        "Enemy spawned"
    );
    events.push(GameEvent::EnemySpawned {
        id: entity_id(entity),
        target,
    });
}

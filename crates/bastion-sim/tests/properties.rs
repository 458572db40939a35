//! Property-based tests for the simulation engine.
//!
//! These drive the public engine API with random seeds, frame deltas and
//! fire schedules, and check the invariants that must hold on every tick.
//! Run with: cargo test --release --test properties

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use proptest::prelude::*;

use bastion_core::enums::GamePhase;
use bastion_core::events::GameEvent;
use bastion_core::rules::GameRules;
use bastion_core::state::EntityId;
use bastion_core::types::Position;
use bastion_sim::{SimConfig, SimulationEngine};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn started(config: SimConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    engine.start_new_game(WIDTH, HEIGHT).unwrap();
    engine
}

/// Spawner disabled so only the test's own shots exist.
fn quiet(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        rules: GameRules {
            spawn_interval_base: 1.0e9,
            spawn_interval_min: 1.0e9,
            ..Default::default()
        },
    }
}

fn shot() -> impl Strategy<Value = (u32, f64, f64)> {
    (0u32..20, 0.0..WIDTH, 0.0..HEIGHT)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Ammo only goes down while a round is being played, and score never goes down.
    #[test]
    fn prop_ammo_and_score_monotonic(
        seed in any::<u64>(),
        dt in 0.25f64..4.0,
        shots in prop::collection::vec(shot(), 0..60)
    ) {
        let mut engine = started(SimConfig { seed, ..Default::default() });
        let mut ammo: Vec<u32> = engine.turrets().iter().map(|t| t.missiles).collect();
        let mut score = engine.score();

        for (wait, x, y) in shots {
            for _ in 0..wait {
                engine.tick(dt);
            }
            if engine.phase() != GamePhase::Playing {
                break;
            }
            engine.fire(Position::new(x, y)).unwrap();

            let now: Vec<u32> = engine.turrets().iter().map(|t| t.missiles).collect();
            for (before, after) in ammo.iter().zip(&now) {
                prop_assert!(after <= before);
            }
            prop_assert!(engine.score() >= score);
            ammo = now;
            score = engine.score();
        }
    }

    /// Explosion radii stay in bounds and rise, then fall, exactly once.
    #[test]
    fn prop_explosion_radius_unimodal(
        seed in any::<u64>(),
        dt in 0.25f64..4.0,
        shots in prop::collection::vec(shot(), 1..10)
    ) {
        let mut engine = started(quiet(seed));
        // id -> (last radius, seen shrinking)
        let mut seen: HashMap<EntityId, (f64, bool)> = HashMap::new();

        for (wait, x, y) in shots {
            engine.fire(Position::new(x, y)).unwrap();
            for _ in 0..wait.max(1) * 5 {
                engine.tick(dt);
                for explosion in engine.explosions() {
                    prop_assert!(explosion.radius >= 0.0);
                    prop_assert!(explosion.radius <= explosion.max_radius);

                    let entry = seen.entry(explosion.id).or_insert((0.0, false));
                    if explosion.radius < entry.0 {
                        entry.1 = true;
                    } else if entry.1 {
                        prop_assert!(explosion.radius <= entry.0, "radius grew after shrinking");
                    }
                    entry.0 = explosion.radius;
                }
            }
        }
    }

    /// Every interceptor arrives and leaves exactly one detonation at its target.
    #[test]
    fn prop_every_interceptor_detonates_once(
        seed in any::<u64>(),
        dt in 0.25f64..4.0,
        targets in prop::collection::vec((0.0..WIDTH, 0.0..HEIGHT), 1..20)
    ) {
        let mut engine = started(quiet(seed));
        for (x, y) in &targets {
            prop_assert!(engine.fire(Position::new(*x, *y)).unwrap());
        }
        engine.drain_events();

        // Slowest case: dt 0.25 at speed 0.05 needs 80 ticks.
        for _ in 0..100 {
            engine.tick(dt);
        }
        prop_assert!(engine.interceptors().is_empty());

        let detonations: Vec<Position> = engine
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::Detonation { position } => Some(position),
                _ => None,
            })
            .collect();
        prop_assert_eq!(detonations.len(), targets.len());
        for (x, y) in &targets {
            prop_assert!(detonations.contains(&Position::new(*x, *y)));
        }
    }

    /// Any command sequence leaves the engine in a consistent state.
    #[test]
    fn prop_random_play_keeps_counters_consistent(
        seed in any::<u64>(),
        shots in prop::collection::vec(shot(), 0..40)
    ) {
        let mut engine = started(SimConfig { seed, ..Default::default() });
        for (wait, x, y) in shots {
            for _ in 0..wait * 10 {
                engine.tick(1.0);
                if engine.phase() == GamePhase::RoundEnd {
                    engine.advance_round().unwrap();
                }
            }
            let _ = engine.fire(Position::new(x, y));

            let stats = engine.round_stats();
            prop_assert!(stats.spawned <= stats.quota);
            prop_assert!(stats.destroyed + stats.impacts <= stats.spawned);
            for turret in engine.turrets() {
                prop_assert!(turret.missiles <= turret.max_missiles);
            }
            if engine.turrets().iter().all(|t| t.destroyed) {
                prop_assert_eq!(engine.phase(), GamePhase::GameOver);
            }
        }
    }
}

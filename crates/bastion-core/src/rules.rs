//! Tunable game rules.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub enemy_quota_base: u32,
    pub enemy_quota_per_round: u32,
    pub spawn_interval_base: f64,
    pub spawn_interval_per_round: f64,
    pub spawn_interval_min: f64,
    pub enemy_speed_base: f64,
    pub enemy_speed_per_round: f64,
    pub enemy_speed_multiplier: f64,
    pub interceptor_speed: f64,
    pub explosion_max_radius: f64,
    pub explosion_growth_rate: f64,
    pub impact_match_epsilon: f64,
    /// Ammo cap for the left, center and right turret.
    pub turret_capacity: [u32; 3],
    pub kill_points: u32,
    pub missile_bonus_points: u32,
    pub win_score: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            enemy_quota_base: ENEMY_QUOTA_BASE,
            enemy_quota_per_round: ENEMY_QUOTA_PER_ROUND,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_per_round: SPAWN_INTERVAL_PER_ROUND,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            enemy_speed_base: ENEMY_SPEED_BASE,
            enemy_speed_per_round: ENEMY_SPEED_PER_ROUND,
            enemy_speed_multiplier: ENEMY_SPEED_MULTIPLIER,
            interceptor_speed: INTERCEPTOR_SPEED,
            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            explosion_growth_rate: EXPLOSION_GROWTH_RATE,
            impact_match_epsilon: IMPACT_MATCH_EPSILON,
            turret_capacity: TURRET_CAPACITY,
            kill_points: KILL_POINTS,
            missile_bonus_points: MISSILE_BONUS_POINTS,
            win_score: WIN_SCORE,
        }
    }
}

impl GameRules {
    /// Number of enemies spawned over the course of `round`.
    pub fn enemy_quota(&self, round: u32) -> u32 {
        self.enemy_quota_base
            .saturating_add(round.saturating_mul(self.enemy_quota_per_round))
    }

    /// Nominal frames between two spawns in `round`.
    pub fn spawn_interval(&self, round: u32) -> f64 {
        (self.spawn_interval_base - f64::from(round) * self.spawn_interval_per_round)
            .max(self.spawn_interval_min)
    }

    /// Progress per nominal frame for enemies spawned in `round`.
    pub fn enemy_speed(&self, round: u32) -> f64 {
        (self.enemy_speed_base + f64::from(round) * self.enemy_speed_per_round)
            * self.enemy_speed_multiplier
    }

    /// Reject values that would stall or break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spawn_interval_min", self.spawn_interval_min),
            ("enemy_speed_base", self.enemy_speed_base),
            ("enemy_speed_multiplier", self.enemy_speed_multiplier),
            ("interceptor_speed", self.interceptor_speed),
            ("explosion_max_radius", self.explosion_max_radius),
            ("explosion_growth_rate", self.explosion_growth_rate),
            ("impact_match_epsilon", self.impact_match_epsilon),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite and > 0, got {value}"),
                });
            }
        }
        if !self.enemy_speed_per_round.is_finite() || self.enemy_speed_per_round < 0.0 {
            return Err(ConfigError::Invalid {
                field: "enemy_speed_per_round",
                reason: format!("must be >= 0, got {}", self.enemy_speed_per_round),
            });
        }
        if !self.spawn_interval_base.is_finite() || !self.spawn_interval_per_round.is_finite() {
            return Err(ConfigError::Invalid {
                field: "spawn_interval_base",
                reason: "spawn interval terms must be finite".into(),
            });
        }
        if self.turret_capacity.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "turret_capacity",
                reason: "every turret needs at least one missile".into(),
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid {
                field: "win_score",
                reason: "must be > 0".into(),
            });
        }
        Ok(())
    }
}

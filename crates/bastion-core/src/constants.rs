//! Simulation constants and tuning parameters.
//!
//! Every per-tick quantity is expressed "per nominal frame" and scaled by `dt`.
//! The values here are the defaults behind [`crate::rules::GameRules`].

/// Duration of one nominal frame in milliseconds (`dt == 1.0`).
pub const NOMINAL_FRAME_MS: f64 = 16.67;

/// Largest `dt` a single tick may integrate. Longer gaps are dropped, not caught up.
pub const MAX_FRAME_DT: f64 = 4.0;

// --- Layout ---

/// Horizontal city positions as fractions of the viewport width.
pub const CITY_RELATIVE_X: [f64; 6] = [0.2, 0.275, 0.35, 0.65, 0.725, 0.8];

/// Horizontal turret positions as fractions of the viewport width (left, center, right).
pub const TURRET_RELATIVE_X: [f64; 3] = [0.08, 0.5, 0.92];

/// Ammo capacity per turret, matching `TURRET_RELATIVE_X`. Edge turrets carry less.
pub const TURRET_CAPACITY: [u32; 3] = [10, 15, 10];

/// Distance from the bottom of the viewport to the ground line (pixels).
pub const GROUND_OFFSET: f64 = 40.0;

// --- Spawning ---

/// Base enemy quota for a round.
pub const ENEMY_QUOTA_BASE: u32 = 10;

/// Additional enemies per round number.
pub const ENEMY_QUOTA_PER_ROUND: u32 = 5;

/// Spawn interval at round 0, in nominal frames.
pub const SPAWN_INTERVAL_BASE: f64 = 80.0;

/// Spawn interval reduction per round, in nominal frames.
pub const SPAWN_INTERVAL_PER_ROUND: f64 = 8.0;

/// Spawn interval floor, in nominal frames.
pub const SPAWN_INTERVAL_MIN: f64 = 15.0;

/// Base enemy speed coefficient (progress per nominal frame, before the multiplier).
pub const ENEMY_SPEED_BASE: f64 = 0.001;

/// Enemy speed increase per round number.
pub const ENEMY_SPEED_PER_ROUND: f64 = 0.0003;

/// Overall enemy speed multiplier.
pub const ENEMY_SPEED_MULTIPLIER: f64 = 2.0;

/// Guard added to the remaining-path denominator of the curved enemy update.
pub const ENEMY_CURVE_EPSILON: f64 = 0.01;

// --- Interceptors & explosions ---

/// Interceptor speed coefficient (progress per nominal frame).
pub const INTERCEPTOR_SPEED: f64 = 0.05;

/// Maximum explosion radius (pixels).
pub const EXPLOSION_MAX_RADIUS: f64 = 40.0;

/// Explosion growth per nominal frame (pixels). Shrinking runs at half this rate.
pub const EXPLOSION_GROWTH_RATE: f64 = 1.5;

/// Shrink rate as a fraction of the growth rate.
pub const EXPLOSION_SHRINK_FACTOR: f64 = 0.5;

// --- Collision ---

/// Per-axis tolerance when matching an enemy's target to a structure (pixels).
pub const IMPACT_MATCH_EPSILON: f64 = 5.0;

// --- Scoring ---

/// Points awarded per enemy destroyed by an explosion.
pub const KILL_POINTS: u32 = 20;

/// Round-end bonus per unspent missile in a surviving turret.
pub const MISSILE_BONUS_POINTS: u32 = 5;

/// Score at which the game is won.
pub const WIN_SCORE: u32 = 1000;

/// Round number of a fresh game.
pub const FIRST_ROUND: u32 = 1;

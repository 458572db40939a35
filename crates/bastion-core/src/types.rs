//! Fundamental geometric and timing types.

use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_FRAME_DT, NOMINAL_FRAME_MS};

/// 2D position in viewport-pixel space. x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of ticks applied since the game started.
    pub tick: u64,
    /// Elapsed time in nominal frames (sum of every applied `dt`).
    pub elapsed_frames: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_vec2().distance(other.to_vec2())
    }

    /// Horizontal distance only (vertical offset ignored).
    pub fn horizontal_distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).abs()
    }

    /// True when both axes are within `epsilon` of `other`.
    pub fn matches(&self, other: &Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    /// Linear interpolation from `self` toward `target` by fraction `t`.
    pub fn lerp(&self, target: &Position, t: f64) -> Position {
        self.to_vec2().lerp(target.to_vec2(), t).into()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A viewport is usable when both sides are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The y coordinate of the ground line where structures stand.
    pub fn ground_y(&self) -> f64 {
        (self.height - crate::constants::GROUND_OFFSET).max(0.0)
    }
}

impl SimClock {
    /// Advance by one tick of `dt` nominal frames.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_frames += dt;
    }
}

/// Convert a wall-clock frame duration into a `dt` multiplier.
///
/// Clamped to [`MAX_FRAME_DT`] so a long stall (hidden tab, debugger pause)
/// never integrates the missed time in one step.
pub fn frame_dt(elapsed: Duration) -> f64 {
    let ms = elapsed.as_secs_f64() * 1000.0;
    (ms / NOMINAL_FRAME_MS).min(MAX_FRAME_DT)
}

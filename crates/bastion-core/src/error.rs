//! Error types shared by the engine and its drivers.

use crate::enums::GamePhase;

/// A player or driver command that the engine refused. State is untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Fire point has a NaN or infinite coordinate.
    #[error("fire point ({x}, {y}) is not finite")]
    NonFinitePoint { x: f64, y: f64 },

    /// Viewport is non-finite or has a non-positive side.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// Command is not valid in the current phase.
    #[error("{command} is not allowed while {phase:?}")]
    PhaseMismatch {
        command: &'static str,
        phase: GamePhase,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("failed to parse config JSON: {message}")]
    Json { message: String },

    /// A rule value is out of range.
    #[error("invalid rule `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

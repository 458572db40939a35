//! Error types for the bastion binary.

use bastion_core::error::{CommandError, ConfigError};

/// Top-level error that `main` propagates with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    /// The engine refused a command issued by the driver.
    #[error("command error: {source}")]
    Command {
        #[from]
        source: CommandError,
    },

    /// The final snapshot could not be serialised.
    #[error("output error: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },
}

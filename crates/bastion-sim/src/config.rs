//! Engine configuration: RNG seed plus the tunable [`GameRules`].
//!
//! Configuration is plain JSON. Every field is optional; missing values fall
//! back to the defaults in `bastion_core::constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use bastion_core::error::ConfigError;
use bastion_core::rules::GameRules;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for spawn positions and target picks. Same seed = same game.
    pub seed: u64,
    pub rules: GameRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: GameRules::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Json {
            message: e.to_string(),
        })?;
        config.rules.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

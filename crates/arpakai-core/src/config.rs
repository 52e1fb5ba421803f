//! Round configuration.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::SpawnBounds;

/// Tunable parameters for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// RNG seed for target placement. Same seed = same layout.
    pub seed: u64,
    pub target_count: u32,
    pub round_seconds: u32,
    pub bonus_points: u32,
    pub spawn_bounds: SpawnBounds,
    pub fire_impulse_scale: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            target_count: TARGET_COUNT,
            round_seconds: ROUND_SECONDS,
            bonus_points: BONUS_POINTS,
            spawn_bounds: SpawnBounds::new(TARGET_BOUNDS_MIN, TARGET_BOUNDS_MAX),
            fire_impulse_scale: FIRE_IMPULSE_SCALE,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config read error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl RoundConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RoundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spawn_bounds.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "spawn bounds min {:?} exceeds max {:?}",
                self.spawn_bounds.min, self.spawn_bounds.max
            )));
        }
        if self.fire_impulse_scale.is_nan() || self.fire_impulse_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fire_impulse_scale must be positive, got {}",
                self.fire_impulse_scale
            )));
        }
        Ok(())
    }
}

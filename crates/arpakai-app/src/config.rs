//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use arpakai_core::config::{ConfigError, RoundConfig};
use arpakai_core::constants::{PHYSICS_RATE, TIMER_PERIOD_SECS};

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV_VAR: &str = "ARPAKAI_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub round: RoundConfig,
    /// JSON file holding the final score slot.
    pub score_path: PathBuf,
    pub physics_rate_hz: u32,
    /// Seconds between countdown ticks. Tests and demos shorten it.
    pub timer_period_secs: f64,
    /// Start the round as soon as the loop is up.
    pub auto_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            score_path: PathBuf::from("arpakai_score.json"),
            physics_rate_hz: PHYSICS_RATE,
            timer_period_secs: TIMER_PERIOD_SECS,
            auto_start: true,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.round.validate()?;
        if self.physics_rate_hz == 0 {
            return Err(ConfigError::Invalid(
                "physics_rate_hz must be at least 1".into(),
            ));
        }
        if !self.timer_period_secs.is_finite() || self.timer_period_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "timer_period_secs must be positive, got {}",
                self.timer_period_secs
            )));
        }
        Ok(())
    }

    pub fn physics_dt(&self) -> f32 {
        1.0 / self.physics_rate_hz as f32
    }

    pub fn physics_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.physics_rate_hz))
    }

    pub fn timer_period(&self) -> Duration {
        Duration::from_secs_f64(self.timer_period_secs)
    }
}

/// Config file path: first CLI argument, else `ARPAKAI_CONFIG`.
pub fn config_path(
    mut args: impl Iterator<Item = String>,
    env_value: Option<String>,
) -> Option<PathBuf> {
    args.next()
        .or(env_value)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.physics_rate_hz, 60);
        assert_eq!(config.timer_period(), Duration::from_secs(1));
        assert_eq!(config.round.round_seconds, 30);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            AppConfig::from_json_str(r#"{"timer_period_secs": 0.05, "round": {"seed": 7}}"#)
                .unwrap();
        assert_eq!(config.timer_period(), Duration::from_millis(50));
        assert_eq!(config.round.seed, 7);
        assert_eq!(config.round.target_count, 100);
        assert!(config.auto_start);
    }

    #[test]
    fn test_zero_physics_rate_rejected() {
        let err = AppConfig::from_json_str(r#"{"physics_rate_hz": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_timer_period_rejected() {
        assert!(AppConfig::from_json_str(r#"{"timer_period_secs": 0}"#).is_err());
        assert!(AppConfig::from_json_str(r#"{"timer_period_secs": -1.0}"#).is_err());
    }

    #[test]
    fn test_invalid_round_section_rejected() {
        let err = AppConfig::from_json_str(r#"{"round": {"fire_impulse_scale": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_path_prefers_cli_argument() {
        let args = vec!["cli.json".to_string()].into_iter();
        assert_eq!(
            config_path(args, Some("env.json".into())),
            Some(PathBuf::from("cli.json"))
        );
        assert_eq!(
            config_path(std::iter::empty(), Some("env.json".into())),
            Some(PathBuf::from("env.json"))
        );
        assert_eq!(config_path(std::iter::empty(), None), None);
        assert_eq!(config_path(std::iter::empty(), Some(String::new())), None);
    }
}

pub mod runtime;
pub use runtime::{apply_env_overrides, CONFIG_PATH_ENV};

use serde::Deserialize;
use std::fmt;

use crate::dashboard::Role;
use crate::i18n::Locale;

/// Complete medibot configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedibotConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Task lifecycle ticker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Time between lifecycle ticks (milliseconds)
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Progress added to each in-transit task per tick
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,
    /// Progress value at which the one-shot delay draw happens
    #[serde(default = "default_delay_checkpoint")]
    pub delay_checkpoint: u8,
    /// Probability that the delay draw fires
    #[serde(default = "default_delay_probability")]
    pub delay_probability: f64,
}

fn default_tick_interval() -> u64 {
    5000
}

fn default_progress_step() -> u8 {
    10
}

fn default_delay_checkpoint() -> u8 {
    70
}

fn default_delay_probability() -> f64 {
    0.3
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            progress_step: default_progress_step(),
            delay_checkpoint: default_delay_checkpoint(),
            delay_probability: default_delay_probability(),
        }
    }
}

/// Notification log configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationConfig {
    /// Maximum retained entries; 0 keeps everything
    #[serde(default)]
    pub max_entries: usize,
}

/// Floor map and fleet telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FleetConfig {
    /// Time between waypoint animation steps (milliseconds)
    #[serde(default = "default_animation_interval")]
    pub animation_interval_ms: u64,
    /// Time between telemetry drift updates (milliseconds)
    #[serde(default = "default_telemetry_interval")]
    pub telemetry_interval_ms: u64,
}

fn default_animation_interval() -> u64 {
    50
}

fn default_telemetry_interval() -> u64 {
    3000
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            animation_interval_ms: default_animation_interval(),
            telemetry_interval_ms: default_telemetry_interval(),
        }
    }
}

/// Initial session settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub role: Role,
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A timer interval of zero milliseconds
    ZeroInterval(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroInterval(field) => write!(f, "{} must be greater than 0", field),
        }
    }
}

impl std::error::Error for ConfigError {}

impl MedibotConfig {
    /// Check values serde cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("simulation.tick_interval_ms", self.simulation.tick_interval_ms),
            ("fleet.animation_interval_ms", self.fleet.animation_interval_ms),
            ("fleet.telemetry_interval_ms", self.fleet.telemetry_interval_ms),
        ];
        for (field, ms) in intervals {
            if ms == 0 {
                return Err(ConfigError::ZeroInterval(field));
            }
        }
        Ok(())
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<MedibotConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: MedibotConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MedibotConfig::default();
        assert_eq!(config.simulation.tick_interval_ms, 5000);
        assert_eq!(config.simulation.progress_step, 10);
        assert_eq!(config.simulation.delay_checkpoint, 70);
        assert_eq!(config.simulation.delay_probability, 0.3);
        assert_eq!(config.notifications.max_entries, 0);
        assert_eq!(config.fleet.animation_interval_ms, 50);
        assert_eq!(config.session.locale, Locale::En);
        assert_eq!(config.session.role, Role::Nurse);
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            [simulation]
            tick_interval_ms = 1000
            progress_step = 5
            delay_checkpoint = 50
            delay_probability = 0.5

            [notifications]
            max_entries = 200

            [fleet]
            animation_interval_ms = 100
            telemetry_interval_ms = 1000

            [session]
            locale = "es"
            role = "Technician"
        "#;

        let config: MedibotConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.tick_interval_ms, 1000);
        assert_eq!(config.simulation.progress_step, 5);
        assert_eq!(config.simulation.delay_probability, 0.5);
        assert_eq!(config.notifications.max_entries, 200);
        assert_eq!(config.fleet.telemetry_interval_ms, 1000);
        assert_eq!(config.session.locale, Locale::Es);
        assert_eq!(config.session.role, Role::Technician);
    }

    #[test]
    fn test_partial_config() {
        // Missing sections and keys use defaults
        let toml = r#"
            [simulation]
            tick_interval_ms = 250
        "#;

        let config: MedibotConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.tick_interval_ms, 250);
        assert_eq!(config.simulation.progress_step, 10); // Default
        assert_eq!(config.fleet.animation_interval_ms, 50); // Default
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[notifications]\nmax_entries = 42").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.notifications.max_entries, 42);
        assert_eq!(config.simulation.tick_interval_ms, 5000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\ntick_interval_ms = 0").unwrap();

        let err = load_config(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "simulation.tick_interval_ms must be greater than 0"
        );

        let mut config = MedibotConfig::default();
        config.fleet.telemetry_interval_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval("fleet.telemetry_interval_ms"))
        );

        config.fleet.telemetry_interval_ms = 3000;
        config.fleet.animation_interval_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval("fleet.animation_interval_ms"))
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/medibot.toml").is_err());
    }
}

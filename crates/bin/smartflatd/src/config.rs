//! Configuration loading TOML file with environment variable overrides.
//!
//! Looks for `smartflat.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use smartflat_domain::error::ValidationError;
use smartflat_domain::thresholds::EngineConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Polling cadence and panic handling.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Thresholds and probabilities handed to the control engine.
    pub engine: EngineConfig,
}

/// Driver cadence.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between two environment + security passes.
    pub interval_secs: u64,
    /// Seconds after a panic before the incident is resolved.
    pub panic_resolve_secs: u64,
    /// Fixed seed for reproducible simulations; entropy when absent.
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smartflat.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smartflat.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(secs) = env_parse("SMARTFLAT_POLL_INTERVAL_SECS") {
            self.poll.interval_secs = secs;
        }
        if let Some(secs) = env_parse("SMARTFLAT_PANIC_RESOLVE_SECS") {
            self.poll.panic_resolve_secs = secs;
        }
        if let Some(seed) = env_parse("SMARTFLAT_SEED") {
            self.poll.seed = Some(seed);
        }
        if let Ok(val) = std::env::var("SMARTFLAT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a zero poll interval and
    /// [`ConfigError::Engine`] for invalid engine thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        self.engine.validate()?;
        Ok(())
    }
}

impl PollConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    #[must_use]
    pub fn panic_resolve_delay(&self) -> Duration {
        Duration::from_secs(self.panic_resolve_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 2,
            panic_resolve_secs: 5,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smartflatd=info,smartflat_app=info".to_string(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Engine thresholds rejected.
    #[error("invalid engine configuration")]
    Engine(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

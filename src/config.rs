//! Runtime configuration loaded from TOML.

use crate::effects::{EffectSettings, MAX_PARTICLE_COUNT, ParticleBounds};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tunables for the terminal game.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct NeonConfig {
    /// Particles per win burst.
    particle_count: usize,

    /// Milliseconds a burst stays on screen.
    clear_after_ms: u64,

    /// Smallest particle size.
    size_min: f32,

    /// Largest particle size (exclusive).
    size_max: f32,

    /// Shortest particle pulse, in seconds.
    duration_min: f32,

    /// Longest particle pulse, in seconds (exclusive).
    duration_max: f32,

    /// Event poll interval of the terminal loop, in milliseconds.
    tick_ms: u64,

    /// Seed for particle placement; random when absent.
    seed: Option<u64>,
}

impl Default for NeonConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            clear_after_ms: 3000,
            size_min: 2.0,
            size_max: 6.0,
            duration_min: 1.0,
            duration_max: 3.0,
            tick_ms: 50,
            seed: None,
        }
    }
}

impl NeonConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(particle_count = config.particle_count, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the particle seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that every range is usable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::new(format!(
                "particle_count {} exceeds {}",
                self.particle_count, MAX_PARTICLE_COUNT
            )));
        }
        if !(self.size_min > 0.0 && self.size_min <= self.size_max) {
            return Err(ConfigError::new(format!(
                "size range {}..{} is invalid",
                self.size_min, self.size_max
            )));
        }
        if !(self.duration_min > 0.0 && self.duration_min <= self.duration_max) {
            return Err(ConfigError::new(format!(
                "duration range {}..{} is invalid",
                self.duration_min, self.duration_max
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Effect settings derived from this configuration.
    pub fn effect_settings(&self) -> EffectSettings {
        EffectSettings {
            particle_count: self.particle_count,
            clear_after: Duration::from_millis(self.clear_after_ms),
            bounds: ParticleBounds {
                size: self.size_min..self.size_max,
                duration: self.duration_min..self.duration_max,
            },
        }
    }

    /// Event poll interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

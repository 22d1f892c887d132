// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. ndt-pulse.yaml file
//! 3. Environment variables (NDT_PULSE_*)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::pulse::{SamplingConfig, MAX_FREQUENCY_HZ};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Time axis settings
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Input validation limits
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["ndt-pulse.yaml", "ndt-pulse.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("NDT_PULSE_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("NDT_PULSE_LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("NDT_PULSE_SAMPLE_INTERVAL_S") {
            if let Ok(interval) = val.parse() {
                self.sampling.min_interval_s = interval;
            }
        }
        if let Ok(val) = env::var("NDT_PULSE_MAX_FREQUENCY_HZ") {
            if let Ok(freq) = val.parse() {
                self.validation.max_frequency_hz = freq;
            }
        }
        if let Ok(val) = env::var("NDT_PULSE_MAX_SAMPLES") {
            if let Ok(n) = val.parse() {
                self.validation.max_samples = n;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        self.sampling.validate().map_err(Error::Config)?;

        let max_freq = self.validation.max_frequency_hz;
        if !(max_freq > 0.0 && max_freq <= MAX_FREQUENCY_HZ) {
            return Err(Error::Config(format!(
                "max_frequency_hz must be in (0, {MAX_FREQUENCY_HZ:e}], got {max_freq}"
            )));
        }
        if self.validation.max_samples < self.sampling.min_samples {
            return Err(Error::Config(format!(
                "max_samples ({}) must be >= min_samples ({})",
                self.validation.max_samples, self.sampling.min_samples
            )));
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(Error::Config(format!(
                "log format must be 'json' or 'pretty', got '{}'",
                self.logging.format
            )));
        }
        if self.sampling.min_interval_s > crate::pulse::DEFAULT_SAMPLE_INTERVAL_S {
            tracing::warn!(
                min_interval_s = self.sampling.min_interval_s,
                "Sampling interval is coarser than the default grid; previews may alias."
            );
        }
        Ok(())
    }
}

/// Validation limits applied to form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Highest accepted carrier frequency in Hz (never above 1 GHz)
    #[serde(default = "default_max_frequency")]
    pub max_frequency_hz: f64,

    /// Largest time axis a form may request
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_frequency_hz: default_max_frequency(),
            max_samples: default_max_samples(),
        }
    }
}

fn default_max_frequency() -> f64 {
    MAX_FREQUENCY_HZ
}

fn default_max_samples() -> usize {
    // 100 ms on the default grid
    6_000_000
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

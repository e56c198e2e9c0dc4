//! `rangeval` Configuration Module
//!
//! Provides configuration file support via `rangeval.toml`, environment
//! variables and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (CLI flags)
//! 2. Environment variables (`RANGEVAL_*`, `__` between section and key,
//!    e.g. `RANGEVAL_COLUMN__SIZE=5000`)
//! 3. Configuration file (`rangeval.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::column::MAX_ROWS;
use crate::distribution::Distribution;
use crate::evaluator::EvaluatorKind;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Generated column section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Number of rows.
    pub size: usize,
    /// Value distribution, e.g. `EXP(0.01)` or `UNIFORM(0,1000)`.
    pub distribution: Distribution,
    /// Random seed.
    pub seed: u64,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            size: 1_000_000,
            distribution: Distribution::default(),
            seed: 42,
        }
    }
}

/// Query section.
///
/// The range is taken between two quantiles of the sorted column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Quantile of the lower bound.
    pub lower_quantile: f64,
    /// Quantile of the upper bound.
    pub upper_quantile: f64,
    /// Number of timed repetitions per evaluator.
    pub iterations: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            lower_quantile: 0.5,
            upper_quantile: 0.55,
            iterations: 10,
        }
    }
}

/// Evaluator selection section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorsConfig {
    /// Strategies to build and query.
    pub enabled: Vec<EvaluatorKind>,
}

impl Default for EvaluatorsConfig {
    fn default() -> Self {
        Self {
            enabled: EvaluatorKind::all().to_vec(),
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
    /// Log format: text or json.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Main `rangeval` configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RangevalConfig {
    /// Generated column configuration.
    pub column: ColumnConfig,
    /// Query configuration.
    pub query: QueryConfig,
    /// Evaluator selection.
    pub evaluators: EvaluatorsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl RangevalConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("rangeval.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("RANGEVAL_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column.size == 0 || self.column.size > MAX_ROWS {
            return Err(ConfigError::InvalidValue {
                key: "column.size".to_string(),
                message: format!(
                    "value {} is out of range [1, {MAX_ROWS}]",
                    self.column.size
                ),
            });
        }

        let quantiles = [
            ("query.lower_quantile", self.query.lower_quantile),
            ("query.upper_quantile", self.query.upper_quantile),
        ];
        for (key, q) in quantiles {
            if !(0.0..=1.0).contains(&q) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("value {q} is out of range [0, 1]"),
                });
            }
        }
        if self.query.lower_quantile > self.query.upper_quantile {
            return Err(ConfigError::InvalidValue {
                key: "query.lower_quantile".to_string(),
                message: format!(
                    "value {} is greater than query.upper_quantile {}",
                    self.query.lower_quantile, self.query.upper_quantile
                ),
            });
        }

        if self.query.iterations == 0 {
            return Err(ConfigError::InvalidValue {
                key: "query.iterations".to_string(),
                message: "value must be >= 1".to_string(),
            });
        }

        if self.evaluators.enabled.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "evaluators.enabled".to_string(),
                message: "at least one evaluator must be enabled".to_string(),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

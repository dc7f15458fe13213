//! Top-level netsel configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults::{MAX_VALID_RSSI, MIN_VALID_RSSI};
use super::{ObservabilityConfig, RegistryConfig, ScoringConfig, SelectionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
/// Every section and field is optional in TOML; missing values take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetselConfig {
    pub scoring: ScoringConfig,
    pub registry: RegistryConfig,
    pub selection: SelectionConfig,
    pub observability: ObservabilityConfig,
}

impl NetselConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        for (field, value) in [
            ("scoring.good_rssi_24ghz", s.good_rssi_24ghz),
            ("scoring.good_rssi_5ghz", s.good_rssi_5ghz),
            ("scoring.good_rssi_6ghz", s.good_rssi_6ghz),
            ("scoring.cutoff_rssi_min", s.cutoff_rssi_min),
            ("scoring.cutoff_rssi_max", s.cutoff_rssi_max),
        ] {
            if !(MIN_VALID_RSSI..=MAX_VALID_RSSI).contains(&value) {
                return Err(invalid(
                    field,
                    format!("must be between {MIN_VALID_RSSI} and {MAX_VALID_RSSI} dBm"),
                ));
            }
        }
        if s.cutoff_rssi_min > s.cutoff_rssi_max {
            return Err(invalid(
                "scoring.cutoff_rssi_min",
                "must not exceed scoring.cutoff_rssi_max".to_string(),
            ));
        }
        if s.throughput_bonus_denominator <= 0 {
            return Err(invalid(
                "scoring.throughput_bonus_denominator",
                "must be greater than 0".to_string(),
            ));
        }
        if self.selection.scorer.trim().is_empty() {
            return Err(invalid("selection.scorer", "must not be empty".to_string()));
        }
        if self.selection.last_selection_decay_minutes <= 0 {
            return Err(invalid(
                "selection.last_selection_decay_minutes",
                "must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message,
    }
}

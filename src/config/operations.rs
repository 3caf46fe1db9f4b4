//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::ExpansionMode;
use crate::error::{EpisodicError, Result};
use crate::prompts::ExpansionPolicy;
use std::path::Path;

/// Log levels accepted by `log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(EpisodicError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EpisodicError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| EpisodicError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `system_prompts` must be non-empty, with no blank entries
    /// - `sample_count` must be positive when `expansion` is `sampled`
    /// - `log_level` must be a known level
    pub fn validate(&self) -> Result<()> {
        if self.system_prompts.is_empty() {
            return Err(EpisodicError::UserError(
                "config validation failed: system_prompts must not be empty".to_string(),
            ));
        }

        if let Some(index) = self.system_prompts.iter().position(|p| p.trim().is_empty()) {
            return Err(EpisodicError::UserError(format!(
                "config validation failed: system_prompts[{}] is blank",
                index
            )));
        }

        if self.expansion == ExpansionMode::Sampled && self.sample_count == 0 {
            return Err(EpisodicError::UserError(
                "config validation failed: sample_count must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(EpisodicError::UserError(format!(
                "config validation failed: unknown log_level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// The expansion policy described by `expansion` and `sample_count`.
    pub fn expansion_policy(&self) -> ExpansionPolicy {
        match self.expansion {
            ExpansionMode::CrossProduct => ExpansionPolicy::CrossProduct,
            ExpansionMode::Sampled => ExpansionPolicy::Sampled {
                count: self.sample_count,
            },
        }
    }
}

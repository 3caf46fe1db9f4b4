//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for an episodic run.
///
/// Loaded from an optional YAML file; every field has a default, and
/// unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Randomness
    // =========================================================================
    /// Seed for prompt expansion and selection. Unset means OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    // =========================================================================
    // System prompts
    // =========================================================================
    /// Base templates with `%{a|b}` groups and `{{name}}` placeholders.
    #[serde(default = "default_system_prompts")]
    pub system_prompts: Vec<String>,

    /// How templates are expanded into the prompt pool.
    #[serde(default)]
    pub expansion: ExpansionMode,

    /// Resolutions per template when `expansion` is `sampled`.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Drop duplicate prompts from the pool.
    #[serde(default = "default_true")]
    pub dedupe: bool,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Default log level when `EPISODIC_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            system_prompts: default_system_prompts(),
            expansion: ExpansionMode::default(),
            sample_count: default_sample_count(),
            dedupe: default_true(),
            log_level: default_log_level(),
        }
    }
}

//! Configuration types and defaults for episodic.
//!
//! This module defines enums and default value functions used by the
//! Config struct.

use crate::prompts::BASE_SYSTEM_PROMPTS;
use serde::{Deserialize, Serialize};

/// How system prompt templates are expanded into the prompt pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionMode {
    /// Every combination of every alternation group (default).
    #[default]
    CrossProduct,
    /// A fixed number of random resolutions per template.
    Sampled,
}

impl ExpansionMode {
    /// Parse an expansion mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cross_product" => Some(Self::CrossProduct),
            "sampled" => Some(Self::Sampled),
            _ => None,
        }
    }
}

/// The stock roleplay system prompt templates.
pub fn default_system_prompts() -> Vec<String> {
    BASE_SYSTEM_PROMPTS.iter().map(|s| s.to_string()).collect()
}

// Default value functions for serde
pub(crate) fn default_sample_count() -> usize {
    16
}
pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}

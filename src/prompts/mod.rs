//! System prompt generation.
//!
//! This module provides:
//!
//! - **Template**: `%{a|b}` alternation parsing and expansion
//! - **Placeholders**: `{{name}}` substitution for names, personas and
//!   redacted user names
//! - **Builtin**: the stock roleplay system prompts
//!
//! # Template Syntax
//!
//! ```text
//! Enter %{roleplay|RP} mode. You are {{char}}:
//!
//! {{persona}}
//! ```
//!
//! `generate_prompts` resolves every `%{...}` group; `{{...}}` placeholders
//! survive into the pool and are filled per conversation.

mod builtin;
mod placeholders;
mod template;

pub use builtin::BASE_SYSTEM_PROMPTS;
pub use placeholders::{
    CHAR, PERSONA, REDACTION_TOKENS, USER, fill_system_prompt, normalize_message, placeholders_in,
};
pub use template::{PromptError, Segment, expand_all, expand_one, parse_template};

use rand::Rng;
use std::collections::HashSet;

/// How templates are turned into concrete prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// Every combination of every group.
    CrossProduct,
    /// `count` random resolutions per template.
    Sampled { count: usize },
}

/// Expand templates into a pool of concrete system prompts.
///
/// Templates are processed in order. With `dedupe`, later duplicates are
/// dropped and first-occurrence order is kept.
///
/// # Errors
///
/// Returns a `PromptError` if any template is malformed or the resulting
/// pool is empty.
pub fn generate_prompts<S, R>(
    templates: &[S],
    policy: ExpansionPolicy,
    dedupe: bool,
    rng: &mut R,
) -> Result<Vec<String>, PromptError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut pool = Vec::new();

    for template in templates {
        let segments = parse_template(template.as_ref())?;
        match policy {
            ExpansionPolicy::CrossProduct => pool.extend(expand_all(&segments)),
            ExpansionPolicy::Sampled { count } => {
                pool.extend((0..count).map(|_| expand_one(&segments, &mut *rng)))
            }
        }
    }

    if dedupe {
        let mut seen = HashSet::new();
        pool.retain(|p| seen.insert(p.clone()));
    }

    if pool.is_empty() {
        return Err(PromptError::EmptyPool);
    }

    tracing::debug!(templates = templates.len(), prompts = pool.len(), "expanded system prompts");
    Ok(pool)
}

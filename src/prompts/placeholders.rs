//! `{{name}}` placeholder substitution.
//!
//! Placeholders are literal tokens; substitution is plain string replacement
//! with no escaping. The persona is inserted before the name is filled, so a
//! persona quoting `{{char}}` resolves to the character name too.

use regex::Regex;
use std::sync::LazyLock;

/// Character name placeholder.
pub const CHAR: &str = "{{char}}";

/// Character persona placeholder.
pub const PERSONA: &str = "{{persona}}";

/// User name placeholder. Left for downstream consumers to fill.
pub const USER: &str = "{{user}}";

/// Tokens that chat-log exporters put where the human's name was.
pub const REDACTION_TOKENS: &[&str] = &[
    "[NAME_IN_MESSAGE_REDACTED]",
    "[REDACTED]",
    "[FIRST_NAME_REDACTED]",
    "[USERNAME_REDACTED]",
    "[NAME_REDACTED]",
];

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder regex is valid"));

/// Fill the character name and persona into a system prompt.
///
/// `{{persona}}` is filled first, then every `{{char}}`, including those
/// the persona brought in. Any other placeholder is passed through untouched.
pub fn fill_system_prompt(template: &str, char_name: &str, persona: &str) -> String {
    template.replace(PERSONA, persona).replace(CHAR, char_name)
}

/// Normalize one chat message.
///
/// `{{char}}` becomes the character name, and every redaction token becomes
/// `{{user}}`.
pub fn normalize_message(text: &str, char_name: &str) -> String {
    let mut s = text.replace(CHAR, char_name);
    for token in REDACTION_TOKENS {
        s = s.replace(token, USER);
    }
    s
}

/// Names of the placeholders in `text`, in first-occurrence order.
pub fn placeholders_in(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in PLACEHOLDER_RE.captures_iter(text) {
        let name = &cap[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

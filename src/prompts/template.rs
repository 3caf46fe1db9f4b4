//! Alternation expansion for system prompt templates.
//!
//! # Syntax
//!
//! - `%{a|b|c}` - Resolves to exactly one of `a`, `b` or `c`
//! - `{{name}}` - Placeholder, copied through verbatim
//!
//! Groups do not nest. An option may be empty (`%{very |}`), but the group
//! itself may not be (`%{}`).

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for template expansion failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A `%{` was found without a matching `}`.
    UnterminatedGroup {
        /// Byte position of the `%{` in the template.
        position: usize,
    },
    /// A group with no content was found (e.g., `%{}`).
    EmptyGroup {
        /// Byte position of the `%{` in the template.
        position: usize,
    },
    /// Expansion produced no prompts at all.
    EmptyPool,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::UnterminatedGroup { position } => {
                write!(
                    f,
                    "unterminated '%{{' group at position {} in template",
                    position
                )
            }
            PromptError::EmptyGroup { position } => {
                write!(f, "empty group '%{{}}' at position {} in template", position)
            }
            PromptError::EmptyPool => write!(f, "system prompt pool is empty"),
        }
    }
}

impl std::error::Error for PromptError {}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as-is.
    Literal(String),
    /// An alternation group; exactly one option is chosen.
    Choice(Vec<String>),
}

/// Split a template into literal text and alternation groups.
pub fn parse_template(template: &str) -> Result<Vec<Segment>, PromptError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '%' || !matches!(chars.peek(), Some((_, '{'))) {
            literal.push(ch);
            continue;
        }
        chars.next(); // consume the {

        let mut body = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) => break,
                Some((_, c)) => body.push(c),
                None => return Err(PromptError::UnterminatedGroup { position: pos }),
            }
        }

        if body.is_empty() {
            return Err(PromptError::EmptyGroup { position: pos });
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Choice(
            body.split('|').map(str::to_string).collect(),
        ));
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Every resolution of a template, rightmost group varying fastest.
pub fn expand_all(segments: &[Segment]) -> Vec<String> {
    segments.iter().fold(vec![String::new()], |prefixes, segment| match segment {
        Segment::Literal(text) => prefixes
            .into_iter()
            .map(|mut p| {
                p.push_str(text);
                p
            })
            .collect(),
        Segment::Choice(options) => prefixes
            .iter()
            .flat_map(|p| options.iter().map(move |o| format!("{}{}", p, o)))
            .collect(),
    })
}

/// One resolution of a template, each group picked uniformly at random.
pub fn expand_one<R: Rng + ?Sized>(segments: &[Segment], rng: &mut R) -> String {
    let mut result = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Choice(options) => {
                if let Some(option) = options.choose(rng) {
                    result.push_str(option);
                }
            }
        }
    }
    result
}

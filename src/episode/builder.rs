//! Roleplay episode construction.
//!
//! Each conversation with a persona becomes one episode:
//!
//! 1. A system prompt is drawn uniformly from the prompt pool and filled
//!    with the character's name and persona.
//! 2. Every message becomes a user or model turn, with `{{char}}` filled
//!    and redaction tokens rewritten to `{{user}}`.
//! 3. The episode identifier is the conversation identifier under the
//!    `characterai-roleplay-` namespace.
//!
//! Conversations without a persona are skipped and reported to the
//! `EpisodeLog`. Dataset errors pass through untouched.

use super::log::EpisodeLog;
use super::types::{Episode, Turn, TurnKind};
use crate::dataset::Conversation;
use crate::error::Result;
use crate::prompts::{PromptError, fill_system_prompt, normalize_message};
use rand::Rng;
use serde::Serialize;

/// Namespace prepended to conversation identifiers.
pub const IDENTIFIER_PREFIX: &str = "characterai-roleplay-";

/// Counters for one pass over a dataset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Episodes yielded.
    pub emitted: usize,
    /// Conversations skipped for lacking a persona.
    pub skipped: usize,
    /// Dataset errors passed through.
    pub errors: usize,
}

/// Build the episode for one conversation using an already chosen template.
pub fn build_episode(conversation: &Conversation, persona: &str, template: &str) -> Episode {
    let name = conversation.bot.name.as_str();

    let system_turn = Turn::new(fill_system_prompt(template, name, persona), TurnKind::System);

    let mut turns = Vec::with_capacity(conversation.messages.len() + 1);
    turns.push(system_turn);
    turns.extend(conversation.messages.iter().map(|message| {
        Turn::new(
            normalize_message(&message.text, name),
            TurnKind::for_message(message.is_human),
        )
    }));

    Episode {
        turns,
        identifier: format!("{}{}", IDENTIFIER_PREFIX, conversation.identifier),
    }
}

/// Lazy stream of roleplay episodes over a conversation source.
///
/// Pull-based: each `next()` reads conversations until one produces an
/// episode, the source yields an error, or the source is exhausted.
pub struct RoleplayEpisodes<'p, I, R, L> {
    conversations: I,
    prompts: &'p [String],
    rng: R,
    log: L,
    stats: BuildStats,
}

impl<'p, I, R, L> RoleplayEpisodes<'p, I, R, L>
where
    I: Iterator<Item = Result<Conversation>>,
    R: Rng,
    L: EpisodeLog,
{
    /// Create a builder drawing system prompts from `prompts`.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::EmptyPool` if `prompts` is empty.
    pub fn new(
        conversations: I,
        prompts: &'p [String],
        rng: R,
        log: L,
    ) -> std::result::Result<Self, PromptError> {
        if prompts.is_empty() {
            return Err(PromptError::EmptyPool);
        }

        Ok(Self {
            conversations,
            prompts,
            rng,
            log,
            stats: BuildStats::default(),
        })
    }

    /// Counters so far.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    fn pick_template(&mut self) -> &'p str {
        let prompts = self.prompts;
        &prompts[self.rng.random_range(0..prompts.len())]
    }
}

impl<I, R, L> Iterator for RoleplayEpisodes<'_, I, R, L>
where
    I: Iterator<Item = Result<Conversation>>,
    R: Rng,
    L: EpisodeLog,
{
    type Item = Result<Episode>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let conversation = match self.conversations.next()? {
                Ok(conversation) => conversation,
                Err(e) => {
                    self.stats.errors += 1;
                    return Some(Err(e));
                }
            };

            let Some(persona) = conversation.bot.description.as_deref() else {
                self.log
                    .missing_persona(&conversation.bot.name, &conversation.identifier);
                self.stats.skipped += 1;
                continue;
            };

            let template = self.pick_template();
            let episode = build_episode(&conversation, persona, template);
            self.stats.emitted += 1;
            return Some(Ok(episode));
        }
    }
}

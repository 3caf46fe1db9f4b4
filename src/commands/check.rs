//! Implementation of the `episodic check` command.
//!
//! Reads the whole dataset without building anything and reports how a
//! build would treat it. Exits with the dataset failure code when any
//! record is malformed.

use crate::cli::CheckArgs;
use crate::dataset::{Conversation, JsonlDataset};
use crate::error::{EpisodicError, Result};
use crate::prompts::REDACTION_TOKENS;

/// Counts gathered by `check`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Well-formed records.
    pub records: usize,
    /// Records whose character has no persona (would be skipped).
    pub missing_persona: usize,
    /// Messages across records that would be emitted.
    pub messages: usize,
    /// Messages containing at least one redaction token.
    pub redacted_messages: usize,
    /// Malformed records.
    pub errors: usize,
}

impl CheckReport {
    /// Records that would become episodes.
    pub fn episodes(&self) -> usize {
        self.records - self.missing_persona
    }

    fn record(&mut self, conversation: &Conversation) {
        self.records += 1;
        if conversation.bot.description.is_none() {
            self.missing_persona += 1;
            return;
        }
        self.messages += conversation.messages.len();
        self.redacted_messages += conversation
            .messages
            .iter()
            .filter(|m| REDACTION_TOKENS.iter().any(|t| m.text.contains(t)))
            .count();
    }
}

/// Execute the `episodic check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let report = check_dataset(JsonlDataset::open(&args.input)?);

    println!("records:          {}", report.records);
    println!("episodes:         {}", report.episodes());
    println!("missing persona:  {}", report.missing_persona);
    println!("messages:         {}", report.messages);
    println!("redacted:         {}", report.redacted_messages);
    println!("malformed:        {}", report.errors);

    if report.errors > 0 {
        return Err(EpisodicError::Dataset(format!(
            "{} malformed record(s) in '{}'",
            report.errors,
            args.input.display()
        )));
    }

    Ok(())
}

/// Tally a dataset, logging each malformed record.
fn check_dataset<I>(conversations: I) -> CheckReport
where
    I: Iterator<Item = Result<Conversation>>,
{
    let mut report = CheckReport::default();
    for item in conversations {
        match item {
            Ok(conversation) => report.record(&conversation),
            Err(e) => {
                tracing::warn!("{}", e);
                report.errors += 1;
            }
        }
    }
    report
}

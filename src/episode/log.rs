//! Reporting hooks for the episode builder.
//!
//! The builder reports filtered conversations through `EpisodeLog` instead
//! of writing to the global logger, so callers (and tests) decide where the
//! reports go.

/// Receives notices about conversations the builder chose not to emit.
pub trait EpisodeLog {
    /// A conversation was skipped because its character has no persona.
    fn missing_persona(&mut self, char_name: &str, conversation_id: &str);
}

/// Forwards builder notices to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl EpisodeLog for TracingLog {
    fn missing_persona(&mut self, char_name: &str, conversation_id: &str) {
        tracing::debug!(
            conversation = conversation_id,
            "Skipping over conversation with {} because character has no persona data",
            char_name
        );
    }
}

impl<L: EpisodeLog + ?Sized> EpisodeLog for &mut L {
    fn missing_persona(&mut self, char_name: &str, conversation_id: &str) {
        (**self).missing_persona(char_name, conversation_id);
    }
}

/// Keeps every notice in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    pub(crate) skipped: Vec<(String, String)>,
}

#[cfg(test)]
impl EpisodeLog for RecordingLog {
    fn missing_persona(&mut self, char_name: &str, conversation_id: &str) {
        self.skipped
            .push((char_name.to_string(), conversation_id.to_string()));
    }
}

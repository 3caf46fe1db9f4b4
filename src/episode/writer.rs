//! NDJSON episode output.
//!
//! One episode per line, each line a complete JSON object:
//!
//! ```text
//! {"turns":[{"utterance":"...","kind":"system"},...],"identifier":"characterai-roleplay-..."}
//! ```

use super::types::Episode;
use crate::error::{EpisodicError, Result};
use std::io::Write;

/// Writes episodes as newline-delimited JSON.
pub struct EpisodeWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> EpisodeWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Append one episode as a single line.
    pub fn write_episode(&mut self, episode: &Episode) -> Result<()> {
        let line = episode.to_json_line().map_err(|e| {
            EpisodicError::Io(format!(
                "failed to serialize episode '{}': {}",
                episode.identifier, e
            ))
        })?;

        writeln!(self.inner, "{}", line)
            .map_err(|e| EpisodicError::Io(format!("failed to write episode: {}", e)))?;

        self.written += 1;
        Ok(())
    }

    /// Number of episodes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| EpisodicError::Io(format!("failed to flush episodes: {}", e)))?;
        Ok(self.inner)
    }
}

//! Episodes: system-prompted, role-tagged conversations ready for training.
//!
//! - **Types**: `Episode`, `Turn`, `TurnKind`
//! - **Builder**: `RoleplayEpisodes`, the lazy conversation-to-episode stream
//! - **Log**: `EpisodeLog`, where the builder reports skipped conversations
//! - **Writer**: `EpisodeWriter`, NDJSON output

mod builder;
mod log;
mod types;
mod writer;

pub use builder::{BuildStats, IDENTIFIER_PREFIX, RoleplayEpisodes, build_episode};
pub use log::{EpisodeLog, TracingLog};
pub use types::{Episode, Turn, TurnKind};
pub use writer::EpisodeWriter;

#[cfg(test)]
pub(crate) use log::RecordingLog;

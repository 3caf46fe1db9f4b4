//! Error types for the episodic CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::prompts::PromptError;
use thiserror::Error;

/// Main error type for episodic operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum EpisodicError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A dataset record could not be read or parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A system prompt template could not be expanded.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl EpisodicError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EpisodicError::UserError(_) => exit_codes::USER_ERROR,
            EpisodicError::Dataset(_) => exit_codes::DATASET_FAILURE,
            EpisodicError::Prompt(_) => exit_codes::PROMPT_FAILURE,
            EpisodicError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for episodic operations.
pub type Result<T> = std::result::Result<T, EpisodicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = EpisodicError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn dataset_error_has_correct_exit_code() {
        let err = EpisodicError::Dataset("line 3: expected value".to_string());
        assert_eq!(err.exit_code(), exit_codes::DATASET_FAILURE);
    }

    #[test]
    fn prompt_error_converts_and_maps_exit_code() {
        let err: EpisodicError = PromptError::EmptyPool.into();
        assert_eq!(err.exit_code(), exit_codes::PROMPT_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = EpisodicError::Io("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = EpisodicError::Dataset("chats.jsonl:4: missing field `bot`".to_string());
        assert_eq!(
            err.to_string(),
            "Dataset error: chats.jsonl:4: missing field `bot`"
        );

        let err: EpisodicError = PromptError::EmptyPool.into();
        assert_eq!(
            err.to_string(),
            "Prompt error: system prompt pool is empty"
        );
    }
}

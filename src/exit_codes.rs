//! Exit code constants for the episodic CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Dataset failure (unreadable or malformed records)
//! - 3: Prompt template failure
//! - 4: Output I/O failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Dataset failure: a record could not be read or parsed.
pub const DATASET_FAILURE: i32 = 2;

/// Prompt failure: a system prompt template could not be expanded.
pub const PROMPT_FAILURE: i32 = 3;

/// I/O failure while writing episodes or the manifest.
pub const IO_FAILURE: i32 = 4;

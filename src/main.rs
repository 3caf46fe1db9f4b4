//! Episodic: turn character roleplay chat logs into training episodes.
//!
//! This is the main entry point for the `episodic` CLI. It parses arguments,
//! loads configuration, installs logging, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod dataset;
pub mod episode;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod prompts;

use cli::Cli;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let config = Config::load_or_default(cli.command.config_path())?;
    logging::init_tracing(logging::effective_level(cli.verbose, &config.log_level));
    commands::dispatch(cli.command, config)
}

//! Command implementations for episodic.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the prompt-pool setup shared by `build` and
//! `prompts`.

mod build;
mod check;
mod prompts_cmd;

use crate::cli::{Command, PromptOptions};
use crate::config::{Config, ExpansionMode};
use crate::error::{EpisodicError, Result};
use crate::prompts::generate_prompts;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Dispatch a command to its implementation.
///
/// `config` has already been loaded from the command's `--config` path
/// (or defaulted); command-line overrides are applied here.
pub fn dispatch(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Build(args) => build::cmd_build(args, config),
        Command::Prompts(args) => prompts_cmd::cmd_prompts(args, config),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Apply `--seed` and `--expansion` on top of the loaded config.
fn apply_overrides(mut config: Config, opts: &PromptOptions) -> Result<Config> {
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }

    if let Some(mode) = opts.expansion.as_deref() {
        config.expansion = ExpansionMode::from_str(mode).ok_or_else(|| {
            EpisodicError::UserError(format!(
                "invalid expansion mode '{}' (expected cross_product or sampled)",
                mode
            ))
        })?;
    }

    config.validate()?;
    Ok(config)
}

/// RNG for a run: seeded when a seed is configured, OS entropy otherwise.
fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Expand the configured templates into the system prompt pool.
fn prompt_pool(config: &Config, rng: &mut StdRng) -> Result<Vec<String>> {
    let pool = generate_prompts(
        config.system_prompts.as_slice(),
        config.expansion_policy(),
        config.dedupe,
        rng,
    )?;
    Ok(pool)
}

//! CLI argument parsing for episodic.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Episodic: turn character roleplay chat logs into training episodes.
///
/// Each conversation is paired with a randomly chosen system prompt that
/// describes the character, and its messages become user/model turns.
#[derive(Parser, Debug)]
#[command(name = "episodic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for episodic.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build roleplay episodes from a conversation dataset.
    ///
    /// Writes one JSON episode per line. Conversations whose character has
    /// no persona are skipped.
    Build(BuildArgs),

    /// Print the expanded system prompt pool.
    ///
    /// Useful for reviewing template edits before a build.
    Prompts(PromptsArgs),

    /// Parse a dataset and report what a build would do.
    ///
    /// Counts records, missing personas and malformed lines without
    /// writing anything.
    Check(CheckArgs),
}

/// Options shared by commands that expand system prompts.
#[derive(Parser, Debug)]
pub struct PromptOptions {
    /// YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for prompt expansion and selection (overrides config).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Expansion mode: cross_product or sampled (overrides config).
    #[arg(long)]
    pub expansion: Option<String>,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Dataset: a .jsonl file, a directory of .jsonl files, or `-` for stdin.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file, or `-` for stdout.
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Also write a JSON run manifest to this path.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Stop at the first malformed record instead of skipping it.
    #[arg(long)]
    pub fail_fast: bool,

    #[command(flatten)]
    pub prompts: PromptOptions,
}

/// Arguments for the `prompts` command.
#[derive(Parser, Debug)]
pub struct PromptsArgs {
    /// Print only the number of prompts in the pool.
    #[arg(long)]
    pub count: bool,

    #[command(flatten)]
    pub prompts: PromptOptions,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Dataset: a .jsonl file, a directory of .jsonl files, or `-` for stdin.
    #[arg(short, long)]
    pub input: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

impl Command {
    /// Config file named on the command line, if the command takes one.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Build(args) => args.prompts.config.as_deref(),
            Command::Prompts(args) => args.prompts.config.as_deref(),
            Command::Check(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_minimal() {
        let cli = Cli::try_parse_from(["episodic", "build", "--input", "chats.jsonl"]).unwrap();
        assert_eq!(cli.verbose, 0);
        if let Command::Build(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("chats.jsonl"));
            assert_eq!(args.output, PathBuf::from("-"));
            assert!(args.manifest.is_none());
            assert!(!args.fail_fast);
            assert!(args.prompts.config.is_none());
            assert!(args.prompts.seed.is_none());
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn parse_build_full() {
        let cli = Cli::try_parse_from([
            "episodic",
            "-vv",
            "build",
            "-i",
            "data/",
            "-o",
            "out/episodes.jsonl",
            "--manifest",
            "out/manifest.json",
            "--fail-fast",
            "--config",
            "episodic.yaml",
            "--seed",
            "42",
            "--expansion",
            "sampled",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        if let Command::Build(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("data/"));
            assert_eq!(args.output, PathBuf::from("out/episodes.jsonl"));
            assert_eq!(args.manifest, Some(PathBuf::from("out/manifest.json")));
            assert!(args.fail_fast);
            assert_eq!(args.prompts.config, Some(PathBuf::from("episodic.yaml")));
            assert_eq!(args.prompts.seed, Some(42));
            assert_eq!(args.prompts.expansion.as_deref(), Some("sampled"));
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn parse_build_requires_input() {
        assert!(Cli::try_parse_from(["episodic", "build"]).is_err());
    }

    #[test]
    fn parse_prompts() {
        let cli = Cli::try_parse_from(["episodic", "prompts", "--count", "--seed", "3"]).unwrap();
        if let Command::Prompts(args) = cli.command {
            assert!(args.count);
            assert_eq!(args.prompts.seed, Some(3));
        } else {
            panic!("Expected Prompts command");
        }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["episodic", "check", "--input", "-", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 1);
        if let Command::Check(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("-"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn config_path_per_command() {
        let cli = Cli::try_parse_from(["episodic", "prompts", "-c", "a.yaml"]).unwrap();
        assert_eq!(cli.command.config_path(), Some(Path::new("a.yaml")));

        let cli = Cli::try_parse_from(["episodic", "build", "-i", "x.jsonl"]).unwrap();
        assert_eq!(cli.command.config_path(), None);

        let cli = Cli::try_parse_from(["episodic", "check", "-i", "x.jsonl"]).unwrap();
        assert_eq!(cli.command.config_path(), None);
    }

    #[test]
    fn parse_invalid_seed() {
        assert!(Cli::try_parse_from(["episodic", "prompts", "--seed", "abc"]).is_err());
    }
}

//! Implementation of the `episodic build` command.
//!
//! # What `episodic build` does
//!
//! 1. Applies command-line overrides to the config
//! 2. Expands the system prompt templates into the prompt pool
//! 3. Streams conversations from the dataset through the episode builder
//! 4. Writes each episode as one NDJSON line (atomically, for file output)
//! 5. Optionally writes a JSON manifest describing the run
//!
//! Malformed records are logged and skipped unless `--fail-fast` is set.

use super::{apply_overrides, prompt_pool, run_rng};
use crate::cli::BuildArgs;
use crate::config::{Config, ExpansionMode};
use crate::dataset::JsonlDataset;
use crate::episode::{BuildStats, Episode, EpisodeWriter, RoleplayEpisodes, TracingLog};
use crate::error::{EpisodicError, Result};
use crate::fs::{AtomicFile, atomic_write_file};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Summary of a build, written with `--manifest`.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// When the build finished.
    pub generated_at: DateTime<Utc>,
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub expansion: ExpansionMode,
    pub prompt_pool_size: usize,
    #[serde(flatten)]
    pub stats: BuildStats,
}

/// Execute the `episodic build` command.
pub fn cmd_build(args: BuildArgs, config: Config) -> Result<()> {
    let manifest = run_build(&args, config)?;

    tracing::info!(
        emitted = manifest.stats.emitted,
        skipped = manifest.stats.skipped,
        errors = manifest.stats.errors,
        "build finished"
    );

    if let Some(path) = &args.manifest {
        write_manifest(path, &manifest)?;
    }

    Ok(())
}

/// Build episodes from `args.input` into `args.output`.
fn run_build(args: &BuildArgs, config: Config) -> Result<Manifest> {
    let config = apply_overrides(config, &args.prompts)?;
    let mut rng = run_rng(config.seed);
    let pool = prompt_pool(&config, &mut rng)?;
    tracing::info!(prompts = pool.len(), "system prompt pool ready");

    let dataset = JsonlDataset::open(&args.input)?;
    let mut episodes = RoleplayEpisodes::new(dataset, &pool, rng, TracingLog)?;

    if is_stdio(&args.output) {
        let stdout = io::stdout().lock();
        let mut writer = EpisodeWriter::new(BufWriter::new(stdout));
        write_episodes(&mut episodes, &mut writer, args.fail_fast)?;
        writer.into_inner()?;
    } else {
        let mut writer = EpisodeWriter::new(AtomicFile::create(&args.output)?);
        write_episodes(&mut episodes, &mut writer, args.fail_fast)?;
        let written = writer.written();
        writer.into_inner()?.commit()?;
        tracing::info!(episodes = written, path = %args.output.display(), "wrote episodes");
    }

    Ok(Manifest {
        generated_at: Utc::now(),
        input: args.input.clone(),
        output: args.output.clone(),
        seed: config.seed,
        expansion: config.expansion,
        prompt_pool_size: pool.len(),
        stats: episodes.stats(),
    })
}

/// Drain `episodes` into `writer`.
fn write_episodes<I, W>(episodes: I, writer: &mut EpisodeWriter<W>, fail_fast: bool) -> Result<()>
where
    I: Iterator<Item = Result<Episode>>,
    W: Write,
{
    for item in episodes {
        match item {
            Ok(episode) => writer.write_episode(&episode)?,
            Err(e) if fail_fast => return Err(e),
            Err(e) => tracing::warn!("skipping record: {}", e),
        }
    }
    Ok(())
}

fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let mut json = serde_json::to_string_pretty(manifest)
        .map_err(|e| EpisodicError::Io(format!("failed to serialize manifest: {}", e)))?;
    json.push('\n');
    atomic_write_file(path, &json)
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PromptOptions;
    use crate::episode::TurnKind;
    use std::fs;
    use tempfile::TempDir;

    const DATASET: &str = concat!(
        r#"{"identifier": "c1", "bot": {"name": "Aria", "description": "A stoic knight."}, "messages": [{"text": "Hello [REDACTED]", "is_human": true}, {"text": "Greetings, {{char}}.", "is_human": false}]}"#,
        "\n",
        r#"{"identifier": "c2", "bot": {"name": "Ghost", "description": null}, "messages": [{"text": "boo", "is_human": false}]}"#,
        "\n",
        "this line is not json\n",
        r#"{"identifier": "c3", "bot": {"name": "Bram", "description": "A baker."}, "messages": []}"#,
        "\n",
    );

    fn args(dir: &TempDir, fail_fast: bool) -> BuildArgs {
        let input = dir.path().join("chats.jsonl");
        fs::write(&input, DATASET).unwrap();
        BuildArgs {
            input,
            output: dir.path().join("out").join("episodes.jsonl"),
            manifest: Some(dir.path().join("manifest.json")),
            fail_fast,
            prompts: PromptOptions {
                config: None,
                seed: Some(42),
                expansion: None,
            },
        }
    }

    fn read_episodes(path: &Path) -> Vec<Episode> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn build_writes_episodes_and_skips_bad_records() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, false);

        let manifest = run_build(&args, Config::default()).unwrap();

        let episodes = read_episodes(&args.output);
        let ids: Vec<&str> = episodes.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["characterai-roleplay-c1", "characterai-roleplay-c3"]);

        let aria = &episodes[0];
        assert_eq!(aria.turns[0].kind, TurnKind::System);
        assert!(aria.turns[0].utterance.contains("A stoic knight."));
        assert_eq!(aria.turns[1].utterance, "Hello {{user}}");
        assert_eq!(aria.turns[2].utterance, "Greetings, Aria.");
        assert_eq!(episodes[1].turns.len(), 1);

        assert_eq!(manifest.stats.emitted, 2);
        assert_eq!(manifest.stats.skipped, 1);
        assert_eq!(manifest.stats.errors, 1);
        assert_eq!(manifest.seed, Some(42));
        assert!(manifest.prompt_pool_size > 0);
    }

    #[test]
    fn build_is_reproducible_with_seed() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let a = args(&first, false);
        let b = args(&second, false);

        run_build(&a, Config::default()).unwrap();
        run_build(&b, Config::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&a.output).unwrap(),
            fs::read_to_string(&b.output).unwrap()
        );
    }

    #[test]
    fn fail_fast_stops_and_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, true);

        let err = run_build(&args, Config::default()).unwrap_err();

        assert!(matches!(err, EpisodicError::Dataset(_)));
        assert!(!args.output.exists());
        assert!(!dir.path().join("out").join(".episodes.jsonl.tmp").exists());
    }

    #[test]
    fn missing_input_is_user_error() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, false);
        args.input = dir.path().join("missing.jsonl");

        let err = run_build(&args, Config::default()).unwrap_err();
        assert!(matches!(err, EpisodicError::UserError(_)));
    }

    #[test]
    fn cmd_build_writes_manifest() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, false);
        let manifest_path = args.manifest.clone().unwrap();

        cmd_build(args, Config::default()).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(manifest_path).unwrap()).unwrap();
        assert_eq!(manifest["emitted"], 2);
        assert_eq!(manifest["skipped"], 1);
        assert_eq!(manifest["errors"], 1);
        assert_eq!(manifest["seed"], 42);
        assert_eq!(manifest["expansion"], "cross_product");
        assert!(manifest["generated_at"].is_string());
    }

    #[test]
    fn custom_templates_from_config() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, false);
        let config = Config::from_yaml(
            "system_prompts:\n  - \"%{Be|Play} {{char}}. {{persona}} {{response_style_str}}\"\n",
        )
        .unwrap();

        let manifest = run_build(&args, config).unwrap();
        assert_eq!(manifest.prompt_pool_size, 2);

        let episodes = read_episodes(&args.output);
        let system = &episodes[1].turns[0].utterance;
        assert!(
            system == "Be Bram. A baker. {{response_style_str}}"
                || system == "Play Bram. A baker. {{response_style_str}}",
            "unexpected system prompt: {}",
            system
        );
    }
}

//! Implementation of the `episodic prompts` command.
//!
//! Prints the expanded system prompt pool, one block per prompt, followed
//! by the placeholders that remain for per-conversation or downstream
//! substitution.

use super::{apply_overrides, prompt_pool, run_rng};
use crate::cli::PromptsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::prompts::placeholders_in;

/// Execute the `episodic prompts` command.
pub fn cmd_prompts(args: PromptsArgs, config: Config) -> Result<()> {
    let config = apply_overrides(config, &args.prompts)?;
    let pool = prompt_pool(&config, &mut run_rng(config.seed))?;

    if args.count {
        println!("{}", pool.len());
        return Ok(());
    }

    println!("{}", render_pool(&pool));
    Ok(())
}

/// Render the pool with numbered separators and a placeholder summary.
fn render_pool(pool: &[String]) -> String {
    let mut out = String::new();
    for (i, prompt) in pool.iter().enumerate() {
        out.push_str(&format!("--- prompt {} of {} ---\n", i + 1, pool.len()));
        out.push_str(prompt);
        out.push_str("\n\n");
    }

    let placeholders = unresolved_placeholders(pool);
    if placeholders.is_empty() {
        out.push_str("placeholders: (none)");
    } else {
        out.push_str(&format!("placeholders: {}", placeholders.join(", ")));
    }
    out
}

/// Distinct placeholder names across the pool, in first-occurrence order.
fn unresolved_placeholders(pool: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for prompt in pool {
        for name in placeholders_in(prompt) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

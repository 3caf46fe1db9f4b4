//! Tracing setup for the episodic CLI.
//!
//! Logs go to stderr so that `build --output -` can stream episodes on
//! stdout. `EPISODIC_LOG` takes precedence over the config and `-v` flags.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "EPISODIC_LOG";

/// Levels from least to most verbose.
const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// The configured level, or with `-v` flags the more verbose of it and the
/// flag count above `info`.
pub fn effective_level(verbose: u8, configured: &str) -> &'static str {
    let configured = configured.to_lowercase();
    let base = LEVELS
        .iter()
        .position(|l| *l == configured)
        .unwrap_or(2);
    if verbose == 0 {
        return LEVELS[base];
    }
    let requested = 2 + verbose as usize;
    LEVELS[base.max(requested).min(LEVELS.len() - 1)]
}

/// Install the global subscriber.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("episodic={level},warn")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

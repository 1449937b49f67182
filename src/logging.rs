//! Diagnostic logging on stderr. Stdout carries the report only.
//!
//! Priority: `BUILDLOG_GUARD_LOG` env var > `-q` / `-v` flags > default `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "BUILDLOG_GUARD_LOG";

/// Filter directive for the given CLI verbosity.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Call once, before any evaluation work.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
}

use std::path::PathBuf;

use clap::Parser;

use crate::config::ThresholdConfig;
use crate::error::{BuildLogError, Result};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "buildlog-guard")]
#[command(author, version, about = "Build log guard - gate builds on known marker limits")]
#[command(long_about = "Counts Pass/Fail/warning/undefined reference markers in a build log \
    and compares them against known limits.\n\n\
    Thresholds omitted on the command line are read from .buildlog-guard.toml.\n\n\
    Exit codes:\n  \
    0 - Counts within known limits\n  \
    1 - A limit was violated\n  \
    2 - Unreadable log, bad threshold or configuration error")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Build log to evaluate
    pub log_path: PathBuf,

    /// Minimum number of `Pass` lines
    #[arg(value_name = "MIN_PASS")]
    pub min_pass: Option<String>,

    /// Maximum number of `Fail` lines
    #[arg(value_name = "MAX_FAIL")]
    pub max_fail: Option<String>,

    /// Maximum number of `warning` lines
    #[arg(value_name = "MAX_WARNING")]
    pub max_warning: Option<String>,

    /// Maximum number of `undefined reference` lines
    #[arg(value_name = "MAX_UNDEFINED_REFERENCE")]
    pub max_undefined_reference: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Thresholds given on the command line, parsed strictly as base-10 integers.
    ///
    /// # Errors
    /// Returns [`BuildLogError::InvalidThreshold`] for the first value that is not
    /// a non-negative integer.
    pub fn threshold_overrides(&self) -> Result<ThresholdConfig> {
        Ok(ThresholdConfig {
            min_pass: parse_threshold("minPass", self.min_pass.as_deref())?,
            max_fail: parse_threshold("maxFail", self.max_fail.as_deref())?,
            max_warning: parse_threshold("maxWarning", self.max_warning.as_deref())?,
            max_undefined_reference: parse_threshold(
                "maxUndefinedReference",
                self.max_undefined_reference.as_deref(),
            )?,
        })
    }
}

fn parse_threshold(name: &'static str, raw: Option<&str>) -> Result<Option<usize>> {
    raw.map(|value| {
        value
            .parse::<usize>()
            .map_err(|source| BuildLogError::InvalidThreshold {
                name,
                value: value.to_string(),
                source,
            })
    })
    .transpose()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

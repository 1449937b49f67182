pub mod checker;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod output;
pub mod reader;

pub use error::{BuildLogError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_THRESHOLD_EXCEEDED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

//! End-to-end evaluation of one build log: load, classify, decide.

use std::path::Path;

use crate::checker::{ThresholdChecker, Thresholds, Verdict};
use crate::classifier::{Classification, classify};
use crate::error::Result;
use crate::reader::{self, DeduplicatedLog};
use crate::{EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

/// A log containing this exact line gets its warning lines echoed up front.
pub const SPECIAL_CASE_LINE: &str = "Fail EXE_Lithtech";

/// Everything a formatter needs to render the outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub classification: Classification,
    pub thresholds: Thresholds,
    pub verdict: Verdict,
    pub special_case: bool,
}

impl Evaluation {
    /// Warning lines to emit before the summary, if the special-case line was seen.
    #[must_use]
    pub fn special_case_lines(&self) -> Option<&[String]> {
        self.special_case
            .then_some(self.classification.warning_lines.as_slice())
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.verdict.is_rejected() {
            EXIT_THRESHOLD_EXCEEDED
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Evaluate an already-loaded log.
#[must_use]
pub fn evaluate(log: &DeduplicatedLog, thresholds: Thresholds) -> Evaluation {
    let classification = classify(log);
    let verdict = ThresholdChecker::new(thresholds).check(&classification);
    let special_case = log.contains(SPECIAL_CASE_LINE);

    match &verdict {
        Verdict::Accepted => tracing::info!("Build log accepted"),
        Verdict::Rejected(rejection) => tracing::info!(
            category = %rejection.category(),
            limit = rejection.limit(),
            found = rejection.found(),
            "Build log rejected"
        ),
    }

    Evaluation {
        classification,
        thresholds,
        verdict,
        special_case,
    }
}

/// Load the log at `path` and evaluate it.
///
/// # Errors
/// Returns an error if the log file cannot be read.
pub fn evaluate_file(path: &Path, thresholds: Thresholds) -> Result<Evaluation> {
    let log = reader::load(path)?;
    Ok(evaluate(&log, thresholds))
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;

use serde::Serialize;

use crate::checker::{Thresholds, Verdict};
use crate::classifier::Counts;
use crate::error::Result;
use crate::evaluator::Evaluation;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    counts: &'a Counts,
    warning_lines: &'a [String],
    error_lines: &'a [String],
    thresholds: &'a Thresholds,
    special_case: bool,
    verdict: JsonVerdict,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonVerdict {
    Accepted,
    Rejected {
        category: String,
        limit: usize,
        found: usize,
        message: String,
    },
}

fn convert_verdict(verdict: &Verdict) -> JsonVerdict {
    match verdict {
        Verdict::Accepted => JsonVerdict::Accepted,
        Verdict::Rejected(rejection) => JsonVerdict::Rejected {
            category: rejection.category().to_string(),
            limit: rejection.limit(),
            found: rejection.found(),
            message: rejection.to_string(),
        },
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, evaluation: &Evaluation) -> Result<String> {
        let classification = &evaluation.classification;
        let output = JsonOutput {
            counts: &classification.counts,
            warning_lines: &classification.warning_lines,
            error_lines: &classification.error_lines,
            thresholds: &evaluation.thresholds,
            special_case: evaluation.special_case,
            verdict: convert_verdict(&evaluation.verdict),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

use std::fmt::Write;

use crate::checker::{Rejection, Verdict};
use crate::classifier::{Category, Counts};
use crate::error::Result;
use crate::evaluator::Evaluation;

use super::OutputFormatter;

/// Plain-text report, the format CI logs expect.
pub struct TextFormatter;

/// Four-line category summary followed by the `warning:` line diagnostic.
#[must_use]
pub fn report(counts: &Counts, warning_lines: usize) -> String {
    let mut output = String::new();
    for category in Category::ALL {
        let label = format!("{}:", category.label());
        writeln!(output, "{label:<6} {}", counts.get(category)).ok();
    }
    writeln!(output, "warns {warning_lines} vs counts {}", counts.warning).ok();
    output
}

/// Lines joined by newlines and terminated by one; an empty list still
/// produces a single blank line.
fn write_block(output: &mut String, lines: &[String]) {
    writeln!(output, "{}", lines.join("\n")).ok();
}

impl OutputFormatter for TextFormatter {
    fn format(&self, evaluation: &Evaluation) -> Result<String> {
        let classification = &evaluation.classification;
        let mut output = String::new();

        if let Some(lines) = evaluation.special_case_lines() {
            write_block(&mut output, lines);
        }

        output.push_str(&report(
            &classification.counts,
            classification.warning_lines.len(),
        ));

        if let Verdict::Rejected(rejection) = &evaluation.verdict {
            writeln!(output, "{rejection}").ok();
            if matches!(rejection, Rejection::PassFloor { .. }) {
                write_block(&mut output, &classification.error_lines);
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

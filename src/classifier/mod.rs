mod category;

pub use category::{Category, Counts};

use crate::reader::DeduplicatedLog;

/// Lines with this substring are collected as warning lines.
///
/// Distinct from the `"warning"` category marker: the two tallies can differ.
pub const WARNING_LINE_MARKER: &str = "warning:";

/// Lines with this substring are collected as error lines.
pub const ERROR_LINE_MARKER: &str = "error:";

/// Everything derived from a single pass over a deduplicated log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub counts: Counts,
    pub warning_lines: Vec<String>,
    pub error_lines: Vec<String>,
}

impl Classification {
    /// Fold one line into the running tallies.
    ///
    /// Category checks are independent; a line may bump several counters.
    pub fn observe(&mut self, line: &str) {
        if line.contains(WARNING_LINE_MARKER) {
            self.warning_lines.push(line.to_string());
        }
        if line.contains(ERROR_LINE_MARKER) {
            self.error_lines.push(line.to_string());
        }
        for category in Category::ALL {
            if line.contains(category.marker()) {
                self.counts.increment(category);
            }
        }
    }
}

/// Classify every line of the log, in order.
#[must_use]
pub fn classify(log: &DeduplicatedLog) -> Classification {
    let mut classification = Classification::default();
    for line in log.iter() {
        classification.observe(line);
    }

    tracing::debug!(
        pass = classification.counts.pass,
        fail = classification.counts.fail,
        warning = classification.counts.warning,
        undefined_reference = classification.counts.undefined_reference,
        warning_lines = classification.warning_lines.len(),
        error_lines = classification.error_lines.len(),
        "Classified build log"
    );
    classification
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

mod threshold;
mod verdict;

pub use threshold::{ThresholdChecker, Thresholds};
pub use verdict::{Rejection, Verdict};

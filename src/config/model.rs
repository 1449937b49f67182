use serde::Deserialize;

use crate::checker::Thresholds;
use crate::error::{BuildLogError, Result};

/// Top-level layout of `.buildlog-guard.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

/// Threshold values from a config file. Any of them may be left unset.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    pub min_pass: Option<usize>,
    pub max_fail: Option<usize>,
    pub max_warning: Option<usize>,
    pub max_undefined_reference: Option<usize>,
}

impl ThresholdConfig {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            min_pass: overrides.min_pass.or(self.min_pass),
            max_fail: overrides.max_fail.or(self.max_fail),
            max_warning: overrides.max_warning.or(self.max_warning),
            max_undefined_reference: overrides
                .max_undefined_reference
                .or(self.max_undefined_reference),
        }
    }

    /// Resolve into concrete thresholds.
    ///
    /// # Errors
    /// Returns [`BuildLogError::MissingThreshold`] naming the first unset value.
    pub fn resolve(self) -> Result<Thresholds> {
        let require = |value: Option<usize>, name| {
            value.ok_or(BuildLogError::MissingThreshold { name })
        };

        Ok(Thresholds::new(
            require(self.min_pass, "minPass")?,
            require(self.max_fail, "maxFail")?,
            require(self.max_warning, "maxWarning")?,
            require(self.max_undefined_reference, "maxUndefinedReference")?,
        ))
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

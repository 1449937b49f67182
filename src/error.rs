use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildLogError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid threshold for {name}: '{value}'")]
    InvalidThreshold {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Missing threshold: {name}")]
    MissingThreshold { name: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl BuildLogError {
    /// Short category label used as the heading of an error report.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidThreshold { .. } | Self::MissingThreshold { .. } => "Argument",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidThreshold { source, .. } => Some(source.to_string()),
            Self::MissingThreshold { .. }
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the log file path exists"),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check the file permissions of the log file")
                }
                std::io::ErrorKind::InvalidData => Some("The log file must be valid UTF-8 text"),
                _ => None,
            },
            Self::InvalidThreshold { .. } => {
                Some("Thresholds must be non-negative base-10 integers")
            }
            Self::MissingThreshold { .. } => Some(
                "Pass the threshold as a positional argument or set it under [thresholds] in .buildlog-guard.toml",
            ),
            Self::TomlParse(_) => {
                Some("Check the config file format against the [thresholds] schema")
            }
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildLogError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

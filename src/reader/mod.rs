mod dedup;

pub use dedup::DeduplicatedLog;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{BuildLogError, Result};

/// Read a build log from disk and deduplicate its lines.
///
/// The file handle lives only for the duration of this call.
///
/// # Errors
/// Returns [`BuildLogError::FileRead`] if the file cannot be opened, a read
/// fails midway, or the content is not valid UTF-8.
pub fn load(path: &Path) -> Result<DeduplicatedLog> {
    let file_read = |source| BuildLogError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_read)?;
    let log = DeduplicatedLog::from_reader(BufReader::new(file)).map_err(file_read)?;

    tracing::debug!(
        path = %path.display(),
        lines_read = log.lines_read(),
        unique = log.len(),
        "Loaded build log"
    );
    Ok(log)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

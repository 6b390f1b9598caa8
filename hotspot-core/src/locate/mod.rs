//! Log file discovery.
//!
//! Picks the newest log in a directory by the date embedded in its name. File
//! contents are never opened here.

mod name;
mod types;

#[cfg(test)]
mod tests;

pub use name::{LOG_NAME_SCHEMES, LogNameScheme, parse_log_file_name};
pub use types::{Compression, LogFileRef};

use crate::analyze::AnalyzeError;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Find the most recent log file directly inside `log_dir`.
///
/// A missing directory, or one without matching files, yields `Ok(None)`.
pub fn find_latest(log_dir: &Path) -> Result<Option<LogFileRef>, AnalyzeError> {
    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(log_dir = %log_dir.display(), "log directory does not exist");
            return Ok(None);
        }
        Err(e) => return Err(AnalyzeError::unreadable_log_dir(log_dir, e)),
    };

    let mut latest: Option<LogFileRef> = None;

    for entry in entries {
        let entry = entry.map_err(|e| AnalyzeError::unreadable_log_dir(log_dir, e))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some((date, compression)) = file_name.to_str().and_then(parse_log_file_name) else {
            debug!(file = %path.display(), "ignoring file outside the log naming scheme");
            continue;
        };

        let candidate = LogFileRef {
            path,
            date,
            compression,
        };

        if latest
            .as_ref()
            .is_none_or(|current| candidate.supersedes(current))
        {
            latest = Some(candidate);
        }
    }

    Ok(latest)
}

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run. Per-line parse failures never show up here;
/// they are counted by the aggregator instead.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("failed to scan log directory {path}: {source}")]
    UnreadableLogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    UnreadableLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "parse error budget exceeded: {errors} of {lines} lines unparsable \
         (ratio {ratio:.4}, limit {limit})"
    )]
    ParseErrorBudgetExceeded {
        ratio: f64,
        limit: f64,
        errors: u64,
        lines: u64,
    },

    //-------------------------------------------------------------------------
    // Output
    //-------------------------------------------------------------------------
    #[error("failed to read report template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report rows: {0}")]
    RenderReport(#[source] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzeError {
    pub fn unreadable_log_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnreadableLogDir {
            path: path.into(),
            source,
        }
    }

    pub fn unreadable_log_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnreadableLogFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteReport {
            path: path.into(),
            source,
        }
    }
}

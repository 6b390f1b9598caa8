//! Report pipeline.
//!
//! The overall data processing architecture is:
//!
//! find_latest
//! LogFileRef
//! open_log
//! parse_bytes
//! Aggregator
//! AggregateResult
//! build_rows
//! ReportTemplate::render
//! write_report
//!
//! Everything runs sequentially on the calling thread. A report is only written
//! after the aggregator accepted the whole file.

mod error;

#[cfg(test)]
mod tests;

pub use error::AnalyzeError;

use crate::aggregate::{AggregateResult, Aggregator};
use crate::conf::AnalyzerConfig;
use crate::locate::{LogFileRef, find_latest};
use crate::parse::parse_bytes;
use crate::reader::open_log;
use crate::report::{ReportTemplate, build_rows, report_exists, report_path, write_report};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No log file in the log directory follows the naming scheme
    NoLogFound,
    /// The newest log already has a report
    AlreadyReported { date: NaiveDate, path: PathBuf },
    Reported {
        date: NaiveDate,
        path: PathBuf,
        summary: RunSummary,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub requests: u64,
    pub errors: u64,
    pub error_ratio: f64,
    pub distinct_urls: usize,
    pub rows: usize,
}

/// Produce the report for the newest log in `config.log_dir`.
pub fn run(config: &AnalyzerConfig) -> Result<RunOutcome, AnalyzeError> {
    let Some(log_file) = find_latest(&config.log_dir)? else {
        info!(log_dir = %config.log_dir.display(), "no log file for processing");
        return Ok(RunOutcome::NoLogFound);
    };

    info!(
        path = %log_file.path.display(),
        date = %log_file.date.format("%Y.%m.%d"),
        compressed = log_file.is_compressed(),
        "located latest log file"
    );

    let report = report_path(&config.report_dir, log_file.date);
    if report_exists(&report) {
        info!(report = %report.display(), "report already exists");
        return Ok(RunOutcome::AlreadyReported {
            date: log_file.date,
            path: report,
        });
    }

    // Fail on a bad template before spending time on the log.
    let template = ReportTemplate::load(&config.report_template_file)?;

    let result = analyze_file(&log_file, config.error_limit)?;

    let rows: Vec<_> = build_rows(&result, config.report_size).collect();
    let html = template.render(&rows)?;
    write_report(&report, &html)?;

    info!(report = %report.display(), rows = rows.len(), "report written");

    Ok(RunOutcome::Reported {
        date: log_file.date,
        path: report,
        summary: RunSummary {
            requests: result.total_requests(),
            errors: result.error_count(),
            error_ratio: result.error_ratio(),
            distinct_urls: result.distinct_urls(),
            rows: rows.len(),
        },
    })
}

/// Stream, parse and aggregate one log file.
///
/// The file is closed on return, whether the error budget held or not.
pub fn analyze_file(
    log_file: &LogFileRef,
    error_limit: f64,
) -> Result<AggregateResult, AnalyzeError> {
    let lines = open_log(log_file)?;
    let mut aggregator = Aggregator::new(error_limit);

    info!(path = %log_file.path.display(), "statistics collection started");

    for (index, line) in lines.enumerate() {
        let line = line.map_err(|e| AnalyzeError::unreadable_log_file(&log_file.path, e))?;
        let parsed = parse_bytes(&line);

        if let Err(reason) = &parsed {
            debug!(line = index + 1, %reason, "skipping unparsable log line");
        }
        aggregator.feed(parsed);
    }

    info!(
        lines = aggregator.lines_seen(),
        requests = aggregator.total_requests(),
        errors = aggregator.error_count(),
        "statistics collection finished"
    );

    aggregator.finalize().inspect_err(|err| {
        if let AnalyzeError::ParseErrorBudgetExceeded { ratio, limit, .. } = err {
            warn!(error_ratio = *ratio, error_limit = *limit, "parse error budget exceeded");
        }
    })
}

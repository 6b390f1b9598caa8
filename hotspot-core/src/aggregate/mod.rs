//! Per-URL timing aggregation with an error budget.
//!
//! The aggregator owns all statistics for one run. Parse failures are counted,
//! never surfaced individually; `finalize` decides once, at the end of the
//! stream, whether there were too many of them.

mod stats;

#[cfg(test)]
mod tests;

pub use stats::{UrlStats, median};

use crate::analyze::AnalyzeError;
use crate::parse::{ParsedLine, RequestRecord};
use ahash::AHashMap;

pub struct Aggregator {
    error_limit: f64,
    index: AHashMap<String, usize>,
    urls: Vec<UrlStats>,
    total_requests: u64,
    total_time: f64,
    error_count: u64,
}

impl Aggregator {
    /// `error_limit` is the highest tolerated share of unparsable lines.
    pub fn new(error_limit: f64) -> Self {
        Self {
            error_limit,
            index: AHashMap::new(),
            urls: Vec::new(),
            total_requests: 0,
            total_time: 0.0,
            error_count: 0,
        }
    }

    pub fn feed(&mut self, line: ParsedLine) {
        match line {
            Ok(record) => self.record(record),
            Err(_) => self.error_count += 1,
        }
    }

    fn record(&mut self, RequestRecord { url, request_time }: RequestRecord) {
        let slot = match self.index.get(&url) {
            Some(&slot) => slot,
            None => {
                let slot = self.urls.len();
                self.urls.push(UrlStats::new(url.clone()));
                self.index.insert(url, slot);
                slot
            }
        };

        self.urls[slot].record(request_time);
        self.total_requests += 1;
        self.total_time += request_time;
    }

    pub fn lines_seen(&self) -> u64 {
        self.total_requests + self.error_count
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// Share of unparsable lines so far; 0 before any line was seen.
    pub fn error_ratio(&self) -> f64 {
        match self.lines_seen() {
            0 => 0.0,
            seen => self.error_count as f64 / seen as f64,
        }
    }

    /// Close the stream. Fails when the error ratio is strictly above the limit.
    pub fn finalize(self) -> Result<AggregateResult, AnalyzeError> {
        let ratio = self.error_ratio();
        if ratio > self.error_limit {
            return Err(AnalyzeError::ParseErrorBudgetExceeded {
                ratio,
                limit: self.error_limit,
                errors: self.error_count,
                lines: self.lines_seen(),
            });
        }

        Ok(AggregateResult {
            total_requests: self.total_requests,
            total_time: self.total_time,
            error_count: self.error_count,
            index: self.index,
            urls: self.urls,
        })
    }
}

impl Extend<ParsedLine> for Aggregator {
    fn extend<I: IntoIterator<Item = ParsedLine>>(&mut self, lines: I) {
        for line in lines {
            self.feed(line);
        }
    }
}

/// Final, read-only statistics of a run.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    total_requests: u64,
    total_time: f64,
    error_count: u64,
    index: AHashMap<String, usize>,
    urls: Vec<UrlStats>,
}

impl AggregateResult {
    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    pub fn error_ratio(&self) -> f64 {
        match self.total_requests + self.error_count {
            0 => 0.0,
            seen => self.error_count as f64 / seen as f64,
        }
    }

    /// Per-URL statistics in first-seen order.
    pub fn urls(&self) -> &[UrlStats] {
        &self.urls
    }

    pub fn get(&self, url: &str) -> Option<&UrlStats> {
        self.index.get(url).map(|&slot| &self.urls[slot])
    }

    pub fn distinct_urls(&self) -> usize {
        self.urls.len()
    }
}

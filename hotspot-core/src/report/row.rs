use crate::aggregate::UrlStats;
use serde::{Deserialize, Serialize};

/// One ranked URL as it appears in the rendered report. Floats carry three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

impl ReportRow {
    pub(crate) fn from_stats(stats: &UrlStats, total_requests: u64, total_time: f64) -> Self {
        Self {
            url: stats.url().to_string(),
            count: stats.count(),
            count_perc: round3(percent(stats.count() as f64, total_requests as f64)),
            time_sum: round3(stats.time_sum()),
            time_perc: round3(percent(stats.time_sum(), total_time)),
            time_avg: round3(stats.time_avg()),
            time_max: round3(stats.time_max()),
            time_med: round3(stats.time_med()),
        }
    }
}

fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 { 100.0 * part / total } else { 0.0 }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

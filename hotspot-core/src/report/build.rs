use crate::aggregate::{AggregateResult, UrlStats};
use crate::report::row::ReportRow;

/// Rank URLs by total time spent and yield the top `report_size` as rows.
///
/// Ranking is stable: URLs with equal `time_sum` keep their first-seen order.
/// Rounding happens per row after the order is fixed. Rows are computed lazily;
/// call again for a fresh sequence.
pub fn build_rows(
    result: &AggregateResult,
    report_size: usize,
) -> impl Iterator<Item = ReportRow> + '_ {
    let mut ranked: Vec<&UrlStats> = result.urls().iter().collect();
    ranked.sort_by(|a, b| b.time_sum().total_cmp(&a.time_sum()));

    let total_requests = result.total_requests();
    let total_time = result.total_time();

    ranked
        .into_iter()
        .take(report_size)
        .map(move |stats| ReportRow::from_stats(stats, total_requests, total_time))
}

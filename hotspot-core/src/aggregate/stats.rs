/// Running timing statistics for one URL.
///
/// Every observed time is kept so the median is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlStats {
    url: String,
    time_sum: f64,
    time_max: f64,
    times: Vec<f64>,
}

impl UrlStats {
    pub(crate) fn new(url: String) -> Self {
        Self {
            url,
            time_sum: 0.0,
            time_max: 0.0,
            times: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, request_time: f64) {
        self.time_sum += request_time;
        self.time_max = self.time_max.max(request_time);
        self.times.push(request_time);
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of requests; always equal to `times().len()`.
    pub fn count(&self) -> u64 {
        self.times.len() as u64
    }

    pub fn time_sum(&self) -> f64 {
        self.time_sum
    }

    pub fn time_max(&self) -> f64 {
        self.time_max
    }

    /// Observed times in arrival order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn time_avg(&self) -> f64 {
        if self.times.is_empty() {
            0.0
        } else {
            self.time_sum / self.times.len() as f64
        }
    }

    pub fn time_med(&self) -> f64 {
        median(&self.times).unwrap_or(0.0)
    }
}

/// Exact median; the mean of the two central values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

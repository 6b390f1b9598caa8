
use crate::aggregate::{AggregateResult, Aggregator};
use crate::parse::RequestRecord;

pub(crate) fn aggregate(records: &[(&str, f64)]) -> AggregateResult {
    let mut agg = Aggregator::new(0.0);
    agg.extend(records.iter().map(|(url, t)| {
        Ok(RequestRecord {
            url: url.to_string(),
            request_time: *t,
        })
    }));
    agg.finalize().unwrap()
}


use crate::parse::{LineParseError, ParsedLine, RequestRecord};

pub(crate) fn ok(url: &str, request_time: f64) -> ParsedLine {
    Ok(RequestRecord {
        url: url.to_string(),
        request_time,
    })
}

pub(crate) fn bad() -> ParsedLine {
    Err(LineParseError::MissingRequest)
}

//! Access log line parsing.
//!
//! Lines are expected in the nginx `ui_short` format:
//!
//! ```text
//! $remote_addr  $remote_user $http_x_real_ip [$time_local] "$request"
//! $status $body_bytes_sent "$http_referer" "$http_user_agent"
//! "$http_x_forwarded_for" "$http_X_REQUEST_ID" "$http_X_RB_USER" $request_time
//! ```
//!
//! Only two fields matter: the path inside the first quoted field and the
//! trailing request time. Everything in between is skipped, so other formats
//! that share that shape parse too.

mod types;


pub use types::{LineParseError, ParsedLine, RequestRecord};

/// Decode and parse one raw line. Invalid UTF-8 is a parse failure.
pub fn parse_bytes(raw: &[u8]) -> ParsedLine {
    std::str::from_utf8(raw)
        .map_err(|_| LineParseError::InvalidEncoding)
        .and_then(parse_line)
}

/// Parse one log line. Never panics.
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return Err(LineParseError::Empty);
    }

    let open = line.find('"').ok_or(LineParseError::MissingRequest)?;
    let request_start = open + 1;
    let request_end = line[request_start..]
        .find('"')
        .map(|i| request_start + i)
        .ok_or(LineParseError::UnterminatedRequest)?;

    let url = extract_url(&line[request_start..request_end])?;
    let request_time = extract_request_time(line, request_end)?;

    Ok(RequestRecord {
        url: url.to_string(),
        request_time,
    })
}

/// `GET /api/v2/banner/1 HTTP/1.1` -> `/api/v2/banner/1`
fn extract_url(request: &str) -> Result<&str, LineParseError> {
    let mut parts = request.split_whitespace();
    let _method = parts.next().ok_or(LineParseError::MissingUrl)?;
    parts.next().ok_or(LineParseError::MissingUrl)
}

/// `line` has no trailing whitespace, so the last token ends at `line.len()`.
fn extract_request_time(line: &str, request_end: usize) -> Result<f64, LineParseError> {
    let token = line
        .split_whitespace()
        .next_back()
        .ok_or(LineParseError::MissingRequestTime)?;

    if line.len() - token.len() <= request_end {
        return Err(LineParseError::MissingRequestTime);
    }

    let value = token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LineParseError::InvalidRequestTime {
            token: token.to_string(),
        })?;

    if value < 0.0 {
        return Err(LineParseError::NegativeRequestTime { value });
    }

    Ok(value)
}

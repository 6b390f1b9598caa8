use thiserror::Error;

/// One request extracted from a log line.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    /// Path component of the request line, method and protocol stripped
    pub url: String,
    /// `$request_time` in seconds, never negative
    pub request_time: f64,
}

/// Why a line could not be used. Counted against the error budget, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineParseError {
    #[error("line is empty")]
    Empty,

    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    #[error("no quoted request field")]
    MissingRequest,

    #[error("request field is not terminated")]
    UnterminatedRequest,

    #[error("request field has no URL")]
    MissingUrl,

    #[error("no request time after the request field")]
    MissingRequestTime,

    #[error("request time '{token}' is not a number")]
    InvalidRequestTime { token: String },

    #[error("request time {value} is negative")]
    NegativeRequestTime { value: f64 },
}

pub type ParsedLine = Result<RequestRecord, LineParseError>;

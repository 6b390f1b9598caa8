use crate::locate::types::Compression;
use chrono::NaiveDate;
use tracing::warn;

const GZIP_SUFFIX: &str = ".gz";

/// A file naming convention that embeds the log date.
///
/// A name matches when it is `prefix + date + suffix`, optionally followed by
/// `.gz`, and the date token has exactly `date_len` characters.
#[derive(Debug, Clone, Copy)]
pub struct LogNameScheme {
    pub prefix: &'static str,
    pub date_format: &'static str,
    pub date_len: usize,
    pub suffix: &'static str,
}

/// `nginx-access-ui.log-20170630[.gz]`
pub const NGINX_UI_SCHEME: LogNameScheme = LogNameScheme {
    prefix: "nginx-access-ui.log-",
    date_format: "%Y%m%d",
    date_len: 8,
    suffix: "",
};

/// `access-2023-03-15.log[.gz]`
pub const ACCESS_SCHEME: LogNameScheme = LogNameScheme {
    prefix: "access-",
    date_format: "%Y-%m-%d",
    date_len: 10,
    suffix: ".log",
};

pub const LOG_NAME_SCHEMES: &[LogNameScheme] = &[NGINX_UI_SCHEME, ACCESS_SCHEME];

impl LogNameScheme {
    fn date_token<'a>(&self, stem: &'a str) -> Option<&'a str> {
        let token = stem.strip_prefix(self.prefix)?.strip_suffix(self.suffix)?;

        let well_formed = token.len() == self.date_len
            && token.bytes().all(|b| b.is_ascii_digit() || b == b'-');

        well_formed.then_some(token)
    }

    fn match_date(&self, stem: &str) -> Option<NaiveDate> {
        let token = self.date_token(stem)?;

        match NaiveDate::parse_from_str(token, self.date_format) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!(file = stem, token, error = %err, "log file name carries an invalid date");
                None
            }
        }
    }
}

/// Extract the date and compression from a log file name.
///
/// Returns `None` for names that follow none of [`LOG_NAME_SCHEMES`] or carry an
/// impossible date.
pub fn parse_log_file_name(file_name: &str) -> Option<(NaiveDate, Compression)> {
    let (stem, compression) = match file_name.strip_suffix(GZIP_SUFFIX) {
        Some(stem) => (stem, Compression::Gzip),
        None => (file_name, Compression::Plain),
    };

    LOG_NAME_SCHEMES
        .iter()
        .find_map(|scheme| scheme.match_date(stem))
        .map(|date| (date, compression))
}

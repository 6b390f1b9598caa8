use crate::analyze::AnalyzeError;
use crate::locate::{Compression, LogFileRef};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Raw lines of a log, newline included, not yet decoded.
///
/// Decoding is left to the parser so invalid UTF-8 counts as one bad line
/// instead of aborting the stream.
pub struct LogLines<R> {
    reader: R,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Open the located log, decompressing gzip transparently.
///
/// The file handle lives inside the returned iterator and is closed when it is dropped.
pub fn open_log(file: &LogFileRef) -> Result<LogLines<Box<dyn BufRead>>, AnalyzeError> {
    let handle =
        File::open(&file.path).map_err(|e| AnalyzeError::unreadable_log_file(&file.path, e))?;

    let reader: Box<dyn BufRead> = match file.compression {
        Compression::Plain => Box::new(BufReader::new(handle)),
        // Multi-member aware: logrotate may concatenate gzip streams.
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(handle))),
    };

    Ok(LogLines::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flate2::Compression as GzLevel;
    use flate2::write::GzEncoder;
    use std::fs;
    use std::io::{Cursor, Write};
    use tempfile::tempdir;

    fn log_ref(path: std::path::PathBuf, compression: Compression) -> LogFileRef {
        LogFileRef {
            path,
            date: NaiveDate::from_ymd_opt(2017, 6, 30).unwrap(),
            compression,
        }
    }

    #[test]
    fn yields_lines_with_and_without_trailing_newline() {
        let lines: Vec<_> = LogLines::new(Cursor::new(b"first\nsecond\nlast".to_vec()))
            .map(Result::unwrap)
            .collect();

        assert_eq!(
            lines,
            vec![b"first\n".to_vec(), b"second\n".to_vec(), b"last".to_vec()]
        );
    }

    #[test]
    fn passes_invalid_utf8_through_untouched() {
        let lines: Vec<_> = LogLines::new(Cursor::new(b"\xff\xfe\nok\n".to_vec()))
            .map(Result::unwrap)
            .collect();

        assert_eq!(lines[0], b"\xff\xfe\n".to_vec());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn reads_plain_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("access-2017-06-30.log");
        fs::write(&path, "a\nb\n").unwrap();

        let lines: Vec<_> = open_log(&log_ref(path, Compression::Plain))
            .unwrap()
            .map(Result::unwrap)
            .collect();

        assert_eq!(lines, vec![b"a\n".to_vec(), b"b\n".to_vec()]);
    }

    #[test]
    fn reads_gzip_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("access-2017-06-30.log.gz");
        let mut encoder = GzEncoder::new(Vec::new(), GzLevel::fast());
        encoder.write_all(b"a\nb\n").unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let lines: Vec<_> = open_log(&log_ref(path, Compression::Gzip))
            .unwrap()
            .map(Result::unwrap)
            .collect();

        assert_eq!(lines, vec![b"a\n".to_vec(), b"b\n".to_vec()]);
    }

    #[test]
    fn corrupt_gzip_surfaces_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("access-2017-06-30.log.gz");
        fs::write(&path, "definitely not gzip\n").unwrap();

        let mut lines = open_log(&log_ref(path, Compression::Gzip)).unwrap();

        assert!(matches!(lines.next(), Some(Err(_))));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.log");

        let err = open_log(&log_ref(path, Compression::Plain)).err().unwrap();

        assert!(matches!(err, AnalyzeError::UnreadableLogFile { .. }));
    }
}

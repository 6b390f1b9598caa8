use crate::analyze::{AnalyzeError, analyze_file};
use crate::locate::{Compression, LogFileRef};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn request(url: &str, time: &str) -> String {
    format!(
        "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {url} HTTP/1.1\" 200 927 \"-\" \"curl/8\" \"-\" \"1498697422-2190034393-4708-9752759\" \"dc7161be3\" {time}\n"
    )
}

fn plain_log(path: &Path) -> LogFileRef {
    LogFileRef {
        path: path.to_path_buf(),
        date: NaiveDate::from_ymd_opt(2017, 6, 30).unwrap(),
        compression: Compression::Plain,
    }
}

#[test]
fn aggregates_every_parsable_line() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nginx-access-ui.log-20170630");
    let body = [
        request("/a", "0.1"),
        request("/b", "0.2"),
        "garbage\n".to_string(),
        request("/a", "0.3"),
        "\n".to_string(),
    ]
    .concat();
    fs::write(&path, body).unwrap();

    // Act
    let result = analyze_file(&plain_log(&path), 0.5).unwrap();

    // Assert
    assert_eq!(result.total_requests(), 3);
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.get("/a").unwrap().count(), 2);
    assert_eq!(result.get("/b").unwrap().count(), 1);
}

#[test]
fn invalid_utf8_line_counts_as_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nginx-access-ui.log-20170630");
    let mut body = request("/a", "0.1").into_bytes();
    body.extend_from_slice(b"\xff\xfe \"GET /x HTTP/1.1\" 0.1\n");
    fs::write(&path, body).unwrap();

    let result = analyze_file(&plain_log(&path), 0.5).unwrap();

    assert_eq!(result.total_requests(), 1);
    assert_eq!(result.error_count(), 1);
}

#[test]
fn mostly_garbage_file_exceeds_budget() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nginx-access-ui.log-20170630");
    fs::write(&path, [request("/a", "0.1"), "x\ny\nz\n".to_string()].concat()).unwrap();

    let err = analyze_file(&plain_log(&path), 0.5).unwrap_err();

    assert!(
        matches!(err, AnalyzeError::ParseErrorBudgetExceeded { errors: 3, lines: 4, .. }),
        "got {err:?}"
    );
}

#[test]
fn empty_file_is_an_empty_aggregate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nginx-access-ui.log-20170630");
    fs::write(&path, "").unwrap();

    let result = analyze_file(&plain_log(&path), 0.0).unwrap();

    assert_eq!(result.total_requests(), 0);
    assert_eq!(result.error_ratio(), 0.0);
}

#[test]
fn corrupt_gzip_is_unreadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nginx-access-ui.log-20170630.gz");
    fs::write(&path, request("/a", "0.1")).unwrap();

    let log = LogFileRef {
        compression: Compression::Gzip,
        ..plain_log(&path)
    };
    let err = analyze_file(&log, 0.5).unwrap_err();

    assert!(matches!(err, AnalyzeError::UnreadableLogFile { .. }), "got {err:?}");
}

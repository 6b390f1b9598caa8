use crate::locate::{Compression, parse_log_file_name};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn nginx_plain_name_is_recognized() {
    assert_eq!(
        parse_log_file_name("nginx-access-ui.log-20170629"),
        Some((date(2017, 6, 29), Compression::Plain))
    );
}

#[test]
fn nginx_gzip_name_is_recognized() {
    assert_eq!(
        parse_log_file_name("nginx-access-ui.log-20170630.gz"),
        Some((date(2017, 6, 30), Compression::Gzip))
    );
}

#[test]
fn access_names_are_recognized() {
    assert_eq!(
        parse_log_file_name("access-2023-01-01.log"),
        Some((date(2023, 1, 1), Compression::Plain))
    );
    assert_eq!(
        parse_log_file_name("access-2023-03-15.log.gz"),
        Some((date(2023, 3, 15), Compression::Gzip))
    );
}

#[test]
fn unsupported_compression_suffix_is_ignored() {
    assert_eq!(parse_log_file_name("nginx-access-ui.log-20170630.bz2"), None);
    assert_eq!(parse_log_file_name("access-2023-03-15.log.zst"), None);
}

#[test]
fn impossible_dates_are_ignored() {
    assert_eq!(parse_log_file_name("nginx-access-ui.log-33333333"), None);
    assert_eq!(parse_log_file_name("access-2023-02-30.log"), None);
}

#[test]
fn unrelated_names_are_ignored() {
    for name in [
        "notes.txt",
        "",
        ".gz",
        "nginx-access-ui.log-",
        "nginx-access-ui.log-2017063",
        "nginx-access-ui.log-201706300",
        "xnginx-access-ui.log-20170630",
        "access-2023-03-15.txt",
        "access-20230315.log",
    ] {
        assert_eq!(parse_log_file_name(name), None, "name {name:?}");
    }
}

#[test]
fn compression_flag_reflects_variant() {
    assert!(Compression::Gzip.is_compressed());
    assert!(!Compression::Plain.is_compressed());
}

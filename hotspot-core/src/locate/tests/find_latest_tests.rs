use crate::locate::{Compression, LogFileRef, find_latest};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn picks_newest_access_log_and_ignores_other_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("access-2023-01-01.log"), "").unwrap();
    fs::write(root.join("access-2023-03-15.log.gz"), "").unwrap();
    fs::write(root.join("notes.txt"), "").unwrap();

    // Act
    let found = find_latest(root).unwrap();

    // Assert
    assert_eq!(
        found,
        Some(LogFileRef {
            path: root.join("access-2023-03-15.log.gz"),
            date: date(2023, 3, 15),
            compression: Compression::Gzip,
        })
    );
    assert!(found.unwrap().is_compressed());
}

#[test]
fn picks_newest_nginx_log() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20170629"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20170630.gz"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20170630.bz2"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-33333333"), "").unwrap();

    // Act
    let found = find_latest(root).unwrap().unwrap();

    // Assert
    assert_eq!(found.path, root.join("nginx-access-ui.log-20170630.gz"));
    assert_eq!(found.date, date(2017, 6, 30));
    assert_eq!(found.compression, Compression::Gzip);
}

#[test]
fn same_date_prefers_lexicographically_smallest_name() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20230315.gz"), "").unwrap();
    fs::write(root.join("nginx-access-ui.log-20230315"), "").unwrap();
    fs::write(root.join("access-2023-03-15.log"), "").unwrap();

    let found = find_latest(root).unwrap().unwrap();

    assert_eq!(found.path, root.join("access-2023-03-15.log"));
    assert_eq!(found.compression, Compression::Plain);
}

#[test]
fn schemes_compete_on_date_alone() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("nginx-access-ui.log-20230316"), "").unwrap();
    fs::write(root.join("access-2023-03-15.log"), "").unwrap();

    let found = find_latest(root).unwrap().unwrap();

    assert_eq!(found.path, root.join("nginx-access-ui.log-20230316"));
}

#[test]
fn directories_with_matching_names_are_skipped() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("access-2024-01-01.log")).unwrap();
    fs::write(root.join("access-2023-01-01.log"), "").unwrap();

    let found = find_latest(root).unwrap().unwrap();

    assert_eq!(found.date, date(2023, 1, 1));
}

#[test]
fn nested_logs_are_not_considered() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("archive")).unwrap();
    fs::write(root.join("archive/access-2023-01-01.log"), "").unwrap();

    assert_eq!(find_latest(root).unwrap(), None);
}

#[test]
fn empty_directory_yields_none() {
    let dir = tempdir().unwrap();

    assert_eq!(find_latest(dir.path()).unwrap(), None);
}

#[test]
fn missing_directory_yields_none() {
    let dir = tempdir().unwrap();

    assert_eq!(find_latest(&dir.path().join("does-not-exist")).unwrap(), None);
}

use chrono::NaiveDate;
use std::ffi::OsStr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
}

impl Compression {
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::Plain)
    }
}

/// The log file selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileRef {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub compression: Compression,
}

impl LogFileRef {
    pub fn is_compressed(&self) -> bool {
        self.compression.is_compressed()
    }

    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }

    /// Later date wins; on the same date the lexicographically smaller name wins.
    pub(crate) fn supersedes(&self, other: &LogFileRef) -> bool {
        match self.date.cmp(&other.date) {
            std::cmp::Ordering::Equal => self.file_name() < other.file_name(),
            ordering => ordering.is_gt(),
        }
    }
}

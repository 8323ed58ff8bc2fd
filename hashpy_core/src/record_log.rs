//! Append-only text log of computed digests
//!
//! Each saved result becomes one block:
//!
//! ```text
//!
//! [2024-05-01 13:37:00.123456]
//! Text: hello
//! MD5     : 5d41402abc4b2a76b9719d911017c592
//! ------------------------------------------------------------
//! ```
//!
//! The file is opened, written and closed within a single call. Existing
//! content is never rewritten.

use crate::error::IoError;
use crate::hashing::{DigestResult, DigestSet};
use crate::{Error, Result};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log file used when the caller does not name one
pub const DEFAULT_LOG_FILE: &str = "hash_py_output.txt";

/// Width the algorithm name is padded to
const ALGORITHM_COLUMN_WIDTH: usize = 8;

/// Length of the dash line closing each record
const SEPARATOR_WIDTH: usize = 60;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Digest lines of one record
///
/// Built only from a single [`DigestResult`] or a full [`DigestSet`], so a
/// record always carries at least one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntries(Vec<DigestResult>);

impl LogEntries {
    pub fn as_slice(&self) -> &[DigestResult] {
        &self.0
    }
}

impl From<DigestResult> for LogEntries {
    fn from(result: DigestResult) -> Self {
        Self(vec![result])
    }
}

impl From<DigestSet> for LogEntries {
    fn from(set: DigestSet) -> Self {
        Self(set.iter().cloned().collect())
    }
}

/// One saved hashing result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: DateTime<Local>,
    text: String,
    entries: LogEntries,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(text: &str, results: impl Into<LogEntries>) -> Self {
        Self::at(Local::now(), text, results)
    }

    /// Create a record with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Local>,
        text: &str,
        results: impl Into<LogEntries>,
    ) -> Self {
        Self {
            timestamp,
            text: text.to_string(),
            entries: results.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn entries(&self) -> &[DigestResult] {
        self.entries.as_slice()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[{}]", self.timestamp.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Text: {}", self.text)?;
        for entry in self.entries() {
            writeln!(
                f,
                "{:<width$}: {}",
                entry.algorithm().display_name(),
                entry.digest(),
                width = ALGORITHM_COLUMN_WIDTH
            )?;
        }
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

/// Log file destination
#[derive(Debug, Clone)]
pub struct RecordLog {
    path: PathBuf,
}

impl Default for RecordLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl RecordLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record`, creating the file if needed
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // Rendered up front so the block goes out in a single write
        let block = record.to_string();
        file.write_all(block.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.io_error(e))?;

        log::debug!(
            "Appended {} digest(s) to {}",
            record.entries().len(),
            self.path.display()
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        log::warn!("Failed to write log file {}: {source}", self.path.display());
        Error::Io(IoError::from_std(source).with_path(&self.path))
    }
}

/// Append a record for `text` to `destination` (or [`DEFAULT_LOG_FILE`])
///
/// Returns the path that was written.
pub fn append_record(
    text: &str,
    results: impl Into<LogEntries>,
    destination: Option<&Path>,
) -> Result<PathBuf> {
    let log = destination.map(RecordLog::new).unwrap_or_default();
    log.append(&LogRecord::new(text, results))?;
    Ok(log.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoErrorKind;
    use crate::hashing::{HashAlgorithm, compute_all_digests};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 13, 37, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_single_result_format() {
        let record = LogRecord::at(
            fixed_time(),
            "hello",
            DigestResult::compute("hello", HashAlgorithm::MD5),
        );

        assert_eq!(
            record.to_string(),
            "\n[2024-05-01 13:37:00.000000]\n\
             Text: hello\n\
             MD5     : 5d41402abc4b2a76b9719d911017c592\n\
             ------------------------------------------------------------\n"
        );
    }

    #[test]
    fn test_digest_set_format_is_padded_and_ordered() {
        let record = LogRecord::at(fixed_time(), "hello", compute_all_digests("hello"));
        let rendered = record.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "");
        assert!(lines[3].starts_with("MD5     : "));
        assert!(lines[4].starts_with("SHA1    : "));
        assert!(lines[5].starts_with("SHA256  : "));
        assert!(lines[6].starts_with("SHA512  : "));
        assert_eq!(lines[7], "-".repeat(60));
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hashes.txt");
        let log = RecordLog::new(&path);

        log.append(&LogRecord::new("first", compute_all_digests("first")))
            .unwrap();
        log.append(&LogRecord::new(
            "second",
            DigestResult::compute("second", HashAlgorithm::SHA1),
        ))
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let first = content.find("Text: first").unwrap();
        let second = content.find("Text: second").unwrap();
        assert!(first < second);
        assert_eq!(content.matches(&"-".repeat(60)).count(), 2);
    }

    #[test]
    fn test_append_record_returns_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let written = append_record(
            "ünïcödé ✓",
            DigestResult::compute("ünïcödé ✓", HashAlgorithm::SHA256),
            Some(&path),
        )
        .unwrap();

        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Text: ünïcödé ✓"));
    }

    #[test]
    fn test_append_to_missing_directory_fails_with_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = append_record(
            "hello",
            DigestResult::compute("hello", HashAlgorithm::MD5),
            Some(&path),
        )
        .unwrap_err();

        match err {
            Error::Io(io_err) => {
                assert_eq!(io_err.kind, IoErrorKind::FileNotFound);
                assert_eq!(io_err.path, Some(path));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_entries_hold_one_or_four_digests() {
        let single = LogRecord::new("a", DigestResult::compute("a", HashAlgorithm::SHA1));
        let all = LogRecord::new("a", compute_all_digests("a"));

        assert_eq!(single.entries().len(), 1);
        assert_eq!(single.entries()[0].algorithm(), HashAlgorithm::SHA1);
        let algorithms: Vec<HashAlgorithm> = all.entries().iter().map(|e| e.algorithm()).collect();
        assert_eq!(algorithms, HashAlgorithm::ALL);
    }

    #[test]
    fn test_default_destination() {
        assert_eq!(RecordLog::default().path(), Path::new(DEFAULT_LOG_FILE));
    }
}

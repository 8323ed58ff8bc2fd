//! Integration tests for the append-only digest log

use hashpy_core::{
    DigestResult, Error, HashAlgorithm, LogRecord, RecordLog, append_record, compute_all_digests,
};
use tempfile::TempDir;

#[test]
fn two_appends_produce_two_blocks_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hash_py_output.txt");

    append_record("alpha", compute_all_digests("alpha"), Some(&path)).unwrap();
    append_record(
        "beta",
        DigestResult::compute("beta", HashAlgorithm::SHA512),
        Some(&path),
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let timestamps: Vec<&str> = content.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(timestamps.len(), 2);

    let alpha = content.find("Text: alpha").unwrap();
    let beta = content.find("Text: beta").unwrap();
    assert!(alpha < beta);

    // Four digest lines for the set, one for the single result
    let digest_lines = content
        .lines()
        .filter(|l| !l.starts_with("Text: ") && l.contains(": "))
        .count();
    assert_eq!(digest_lines, 4 + 1);
}

#[test]
fn existing_content_is_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "pre-existing line\n").unwrap();

    RecordLog::new(&path)
        .append(&LogRecord::new(
            "hello",
            DigestResult::compute("hello", HashAlgorithm::MD5),
        ))
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("pre-existing line\n"));
    assert!(content.contains("MD5     : 5d41402abc4b2a76b9719d911017c592\n"));
}

#[test]
fn timestamp_line_has_date_and_time() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    append_record("x", compute_all_digests("x"), Some(&path)).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let stamp = content.lines().find(|l| l.starts_with('[')).unwrap();
    // [YYYY-MM-DD HH:MM:SS.ffffff]
    assert_eq!(stamp.len(), 28);
    assert!(stamp.ends_with(']'));
    assert_eq!(&stamp[5..6], "-");
    assert_eq!(&stamp[11..12], " ");
    assert_eq!(&stamp[20..21], ".");
}

#[test]
fn directory_destination_is_io_failure() {
    let dir = TempDir::new().unwrap();

    let err = append_record("x", compute_all_digests("x"), Some(dir.path())).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_unsupported_algorithm());
}

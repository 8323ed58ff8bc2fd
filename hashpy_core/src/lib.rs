//! Hash_Py Core Library
//!
//! Digest computation, verification and result logging for the Hash_Py
//! interactive hashing tool. The library is presentation-agnostic: themes,
//! prompts and animations live in the CLI crate.

pub mod error;
pub mod hashing;
pub mod record_log;
pub mod verify;

// Re-export main types
pub use error::{Error, Result};
pub use hashing::{
    DigestResult, DigestSet, HashAlgorithm, compute_all_digests, compute_digest,
    compute_digest_named,
};
pub use record_log::{DEFAULT_LOG_FILE, LogEntries, LogRecord, RecordLog, append_record};
pub use verify::{Verification, verify, verify_named};

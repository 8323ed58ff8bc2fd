//! Digest verification
//!
//! Recomputes the digest of a text and compares it with a claimed value by
//! exact, case-sensitive string equality. The comparison is not constant
//! time and must not be used to check secrets.

use crate::Error;
use crate::hashing::{HashAlgorithm, compute_digest};

/// Outcome of checking a claimed digest
#[derive(Debug)]
pub enum Verification {
    /// The claimed digest equals the recomputed one
    Match,
    /// The claimed digest differs from the recomputed one
    Mismatch,
    /// No digest could be computed, so nothing was compared
    ComputeError(Error),
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verification::Mismatch)
    }

    /// Error that prevented the comparison, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Verification::ComputeError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<bool> for Verification {
    fn from(matched: bool) -> Self {
        if matched {
            Verification::Match
        } else {
            Verification::Mismatch
        }
    }
}

/// Check `claimed` against the digest of `text`
pub fn verify(text: &str, claimed: &str, algorithm: HashAlgorithm) -> Verification {
    let actual = compute_digest(text, algorithm);
    let outcome = Verification::from(actual == claimed);
    log::debug!("Verification with {algorithm}: {outcome:?}");
    outcome
}

/// Check `claimed` for an algorithm given by name
///
/// An unknown algorithm name yields [`Verification::ComputeError`] rather
/// than being reported as a mismatch.
pub fn verify_named(text: &str, claimed: &str, algorithm: &str) -> Verification {
    match algorithm.parse::<HashAlgorithm>() {
        Ok(algorithm) => verify(text, claimed, algorithm),
        Err(err) => {
            log::warn!("Verification skipped: {err}");
            Verification::ComputeError(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

    #[test]
    fn test_matching_digest() {
        assert!(verify("hello", HELLO_MD5, HashAlgorithm::MD5).is_match());
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let upper = HELLO_MD5.to_uppercase();
        assert!(verify("hello", &upper, HashAlgorithm::MD5).is_mismatch());
    }

    #[test]
    fn test_comparison_is_full_string() {
        assert!(verify("hello", &HELLO_MD5[..16], HashAlgorithm::MD5).is_mismatch());
        let padded = format!("{HELLO_MD5} ");
        assert!(verify("hello", &padded, HashAlgorithm::MD5).is_mismatch());
    }

    #[test]
    fn test_empty_claimed_digest_is_mismatch() {
        assert!(verify("", "", HashAlgorithm::SHA256).is_mismatch());
        assert!(verify("hello", "", HashAlgorithm::SHA1).is_mismatch());
    }

    #[test]
    fn test_wrong_algorithm_is_mismatch() {
        assert!(verify("hello", HELLO_MD5, HashAlgorithm::SHA1).is_mismatch());
    }

    #[test]
    fn test_verify_named_unsupported_is_compute_error() {
        let outcome = verify_named("hello", HELLO_MD5, "md6");

        assert!(!outcome.is_match());
        assert!(!outcome.is_mismatch());
        assert!(outcome.error().is_some_and(Error::is_unsupported_algorithm));
    }

    #[test]
    fn test_verify_named_supported() {
        assert!(verify_named("hello", HELLO_MD5, "MD5").is_match());
        assert!(verify_named("hello", "deadbeef", "md5").is_mismatch());
    }
}

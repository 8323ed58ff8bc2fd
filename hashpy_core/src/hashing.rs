//! Digest computation for the Hash_Py core library
//!
//! Text is encoded as UTF-8 and hashed with one of four fixed algorithms.
//! The algorithm set is closed: [`HashAlgorithm`] maps each variant to its
//! implementation through an exhaustive match, so adding an algorithm is a
//! compile-time change rather than a runtime registration.

use crate::{Error, Result, error::ValidationError};
use serde::{Deserialize, Serialize};

mod algorithms;
mod traits;

pub use traits::HashAlgorithmImpl;

/// Hash algorithms supported by the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// MD5 hash algorithm
    MD5,
    /// SHA1 hash algorithm
    SHA1,
    /// SHA-256 hash algorithm
    SHA256,
    /// SHA-512 hash algorithm
    SHA512,
}

impl HashAlgorithm {
    /// Every supported algorithm in canonical order
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::MD5,
        HashAlgorithm::SHA1,
        HashAlgorithm::SHA256,
        HashAlgorithm::SHA512,
    ];

    /// Implementation backing this algorithm
    pub fn implementation(&self) -> &'static dyn HashAlgorithmImpl {
        match self {
            HashAlgorithm::MD5 => &algorithms::Md5Algorithm,
            HashAlgorithm::SHA1 => &algorithms::Sha1Algorithm,
            HashAlgorithm::SHA256 => &algorithms::Sha256Algorithm,
            HashAlgorithm::SHA512 => &algorithms::Sha512Algorithm,
        }
    }

    /// Lowercase identifier, as typed at the prompt
    pub fn id(&self) -> &'static str {
        self.implementation().id()
    }

    /// Uppercase name used for display and in the log file
    pub fn display_name(&self) -> &'static str {
        self.implementation().display_name()
    }

    /// Length of the hexadecimal digest in characters
    pub fn hex_len(&self) -> usize {
        self.implementation().hex_len()
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::MD5),
            "sha1" => Ok(HashAlgorithm::SHA1),
            "sha256" => Ok(HashAlgorithm::SHA256),
            "sha512" => Ok(HashAlgorithm::SHA512),
            _ => Err(Error::Validation(ValidationError::unsupported_algorithm(s))),
        }
    }
}

/// A digest paired with the algorithm that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestResult {
    algorithm: HashAlgorithm,
    digest: String,
}

impl DigestResult {
    /// Hash `text` with `algorithm`
    pub fn compute(text: &str, algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            digest: compute_digest(text, algorithm),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Lowercase hexadecimal digest
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

/// Digests of one input text for every supported algorithm, in canonical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSet {
    results: [DigestResult; 4],
}

impl DigestSet {
    /// Iterate results in MD5, SHA1, SHA256, SHA512 order
    pub fn iter(&self) -> std::slice::Iter<'_, DigestResult> {
        self.results.iter()
    }

    /// Result for a specific algorithm
    pub fn get(&self, algorithm: HashAlgorithm) -> &DigestResult {
        // Discriminants follow declaration order, which is also the order of ALL
        &self.results[algorithm as usize]
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a DigestSet {
    type Item = &'a DigestResult;
    type IntoIter = std::slice::Iter<'a, DigestResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Hex digest of the UTF-8 encoding of `text`
pub fn compute_digest(text: &str, algorithm: HashAlgorithm) -> String {
    let digest = algorithm.implementation().hash_bytes(text.as_bytes());
    log::debug!(
        "Computed {} digest over {} bytes",
        algorithm.display_name(),
        text.len()
    );
    digest
}

/// Hex digest for an algorithm given by name
///
/// Unknown names are rejected with [`ValidationError::UnsupportedAlgorithm`]
/// and no digest is produced.
pub fn compute_digest_named(text: &str, algorithm: &str) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(compute_digest(text, algorithm))
}

/// Digests of `text` for all four algorithms
pub fn compute_all_digests(text: &str) -> DigestSet {
    DigestSet {
        results: HashAlgorithm::ALL.map(|algorithm| DigestResult::compute(text, algorithm)),
    }
}

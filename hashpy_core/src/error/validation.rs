//! Validation related error types

use thiserror::Error;

/// Input rejected before any work is done
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Algorithm name outside the supported set
    #[error("Unsupported hash algorithm: '{name}' (expected one of md5, sha1, sha256, sha512)")]
    UnsupportedAlgorithm { name: String },
}

impl ValidationError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(name: &str) -> Self {
        Self::UnsupportedAlgorithm {
            name: name.to_string(),
        }
    }
}

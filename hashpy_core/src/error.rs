//! Error types for the Hash_Py core library
//!
//! Errors are split into the two categories the core can produce: failures
//! to persist a log record and rejected input such as an unknown algorithm.

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Hash_Py core library
///
/// - I/O errors: the log destination could not be opened or written
/// - Validation errors: input rejected before any digest is computed
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Whether this error is an unsupported algorithm rejection
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(
            self,
            Error::Validation(ValidationError::UnsupportedAlgorithm { .. })
        )
    }
}

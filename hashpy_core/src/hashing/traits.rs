//! Core trait implemented by every digest algorithm

/// Core trait that all hash algorithms must implement
pub trait HashAlgorithmImpl: Send + Sync {
    /// Lowercase identifier for this algorithm
    fn id(&self) -> &'static str;

    /// Display name for user interfaces and the log file
    fn display_name(&self) -> &'static str;

    /// Length of the hexadecimal digest in characters
    fn hex_len(&self) -> usize;

    /// Calculate the lowercase hex digest for in-memory data
    fn hash_bytes(&self, data: &[u8]) -> String;
}

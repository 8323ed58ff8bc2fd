//! SHA-256 hash algorithm implementation

use crate::hashing::traits::HashAlgorithmImpl;
use sha2::{Digest as Sha2Digest, Sha256};

pub struct Sha256Algorithm;

impl HashAlgorithmImpl for Sha256Algorithm {
    fn id(&self) -> &'static str {
        "sha256"
    }

    fn display_name(&self) -> &'static str {
        "SHA256"
    }

    fn hex_len(&self) -> usize {
        64
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Sha256::digest(data))
    }
}

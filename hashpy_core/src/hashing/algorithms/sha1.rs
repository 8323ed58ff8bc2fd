//! SHA1 hash algorithm implementation

use crate::hashing::traits::HashAlgorithmImpl;
use sha1::{Digest as Sha1Digest, Sha1};

pub struct Sha1Algorithm;

impl HashAlgorithmImpl for Sha1Algorithm {
    fn id(&self) -> &'static str {
        "sha1"
    }

    fn display_name(&self) -> &'static str {
        "SHA1"
    }

    fn hex_len(&self) -> usize {
        40
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Sha1::digest(data))
    }
}

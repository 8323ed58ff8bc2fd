//! MD5 hash algorithm implementation

use crate::hashing::traits::HashAlgorithmImpl;
use md5::{Digest as Md5Digest, Md5};

pub struct Md5Algorithm;

impl HashAlgorithmImpl for Md5Algorithm {
    fn id(&self) -> &'static str {
        "md5"
    }

    fn display_name(&self) -> &'static str {
        "MD5"
    }

    fn hex_len(&self) -> usize {
        32
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Md5::digest(data))
    }
}

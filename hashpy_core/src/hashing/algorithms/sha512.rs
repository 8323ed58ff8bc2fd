//! SHA-512 hash algorithm implementation

use crate::hashing::traits::HashAlgorithmImpl;
use sha2::{Digest as Sha2Digest, Sha512};

pub struct Sha512Algorithm;

impl HashAlgorithmImpl for Sha512Algorithm {
    fn id(&self) -> &'static str {
        "sha512"
    }

    fn display_name(&self) -> &'static str {
        "SHA512"
    }

    fn hex_len(&self) -> usize {
        128
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Sha512::digest(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha512_empty_input() {
        assert_eq!(
            Sha512Algorithm.hash_bytes(b""),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }
}

//! Published digests of well-known inputs

use hashpy_core::HashAlgorithm;

/// A text together with its expected digest
#[derive(Debug, Clone, Copy)]
pub struct KnownVector {
    pub text: &'static str,
    pub algorithm: HashAlgorithm,
    pub digest: &'static str,
}

impl KnownVector {
    const fn new(text: &'static str, algorithm: HashAlgorithm, digest: &'static str) -> Self {
        Self {
            text,
            algorithm,
            digest,
        }
    }
}

/// Empty input, "abc" and "hello" for every supported algorithm
pub fn known_vectors() -> Vec<KnownVector> {
    use HashAlgorithm::*;

    vec![
        KnownVector::new("", MD5, "d41d8cd98f00b204e9800998ecf8427e"),
        KnownVector::new("", SHA1, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        KnownVector::new(
            "",
            SHA256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        KnownVector::new(
            "",
            SHA512,
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        ),
        KnownVector::new("abc", MD5, "900150983cd24fb0d6963f7d28e17f72"),
        KnownVector::new("abc", SHA1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        KnownVector::new(
            "abc",
            SHA256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        KnownVector::new(
            "abc",
            SHA512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        KnownVector::new("hello", MD5, "5d41402abc4b2a76b9719d911017c592"),
        KnownVector::new("hello", SHA1, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"),
        KnownVector::new(
            "hello",
            SHA256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ),
        KnownVector::new(
            "hello",
            SHA512,
            "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca7\
             2323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
        ),
    ]
}

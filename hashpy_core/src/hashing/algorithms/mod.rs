//! Hash algorithm implementations

mod md5;
mod sha1;
mod sha256;
mod sha512;

pub(crate) use self::md5::Md5Algorithm;
pub(crate) use self::sha1::Sha1Algorithm;
pub(crate) use self::sha256::Sha256Algorithm;
pub(crate) use self::sha512::Sha512Algorithm;

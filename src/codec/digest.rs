//! Hex digests of byte slices and files

use std::{fmt, fs::File, io::Read, path::Path};

use sha2::{Digest, Sha256, Sha512};

use crate::error::Result;

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
    Sha512,
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha256 => "SHA256",
            DigestAlgorithm::Sha512 => "SHA512",
        };
        write!(f, "{}", name)
    }
}

pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

pub fn digest_hex(data: &[u8], algo: DigestAlgorithm) -> String {
    match algo {
        DigestAlgorithm::Md5 => md5_hex(data),
        DigestAlgorithm::Sha256 => sha256_hex(data),
        DigestAlgorithm::Sha512 => sha512_hex(data),
    }
}

/// Hashes file content at the given path
pub fn file_digest(path: &Path, algo: DigestAlgorithm) -> Result<String> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(digest_hex(&buffer, algo))
}

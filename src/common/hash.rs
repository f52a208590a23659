// Shared hash utilities for capture stream digesting
//
// Provides unified hashing for the stream consumers with support for
// MD5, SHA-1, SHA-256, BLAKE3, XXH64, CRC32

use blake3::Hasher as Blake3Hasher;
use crc32fast::Hasher as Crc32Hasher;
use md5::Md5;
use sha1::{Digest, Sha1};
use sha2::Sha256;
use xxhash_rust::xxh64::xxh64;

/// Supported digest algorithms
/// - MD5/SHA1: legacy algorithms, fine for capture de-duplication
/// - SHA256: NIST approved, court-accepted forensic standard
/// - BLAKE3: modern, extremely fast cryptographic hash
/// - XXH64: ultra-fast non-cryptographic integrity check
/// - CRC32: fast checksum (non-cryptographic)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Blake3,
    Xxh64,
    Crc32,
}

impl HashAlgorithm {
    /// Parse algorithm name from string (case-insensitive)
    pub fn from_str(algorithm: &str) -> Result<Self, String> {
        match algorithm.trim().to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            "xxh64" | "xxhash64" => Ok(HashAlgorithm::Xxh64),
            "crc32" | "crc-32" => Ok(HashAlgorithm::Crc32),
            _ => Err(format!(
                "Unsupported hash algorithm: '{}'. Supported: md5, sha1, sha256, blake3, xxh64, crc32",
                algorithm
            )),
        }
    }

    /// Get the canonical algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Blake3 => "BLAKE3",
            HashAlgorithm::Xxh64 => "XXH64",
            HashAlgorithm::Crc32 => "CRC32",
        }
    }
}

/// Compute hash of data using the specified algorithm, as lowercase hex
pub fn compute_hash(data: &[u8], algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        }
        HashAlgorithm::Sha1 => {
            let mut hasher = Sha1::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        }
        HashAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        }
        HashAlgorithm::Blake3 => {
            let mut hasher = Blake3Hasher::new();
            hasher.update(data);
            hasher.finalize().to_hex().to_string()
        }
        HashAlgorithm::Xxh64 => {
            format!("{:016x}", xxh64(data, 0))
        }
        HashAlgorithm::Crc32 => {
            let mut hasher = Crc32Hasher::new();
            hasher.update(data);
            format!("{:08x}", hasher.finalize())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_values() {
        assert_eq!(
            compute_hash(b"HEL", HashAlgorithm::Md5),
            "0a8605cc75dad23d8ca9424019c7050f"
        );
        assert_eq!(
            compute_hash(b"", HashAlgorithm::Md5),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_sha1_known_value() {
        assert_eq!(
            compute_hash(b"abc", HashAlgorithm::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            compute_hash(b"abc", HashAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_crc32_known_value() {
        assert_eq!(compute_hash(b"abc", HashAlgorithm::Crc32), "352441c2");
    }

    #[test]
    fn test_digest_lengths() {
        let data = b"hello world";
        assert_eq!(compute_hash(data, HashAlgorithm::Blake3).len(), 64);
        assert_eq!(compute_hash(data, HashAlgorithm::Xxh64).len(), 16);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            HashAlgorithm::from_str("SHA-256").unwrap(),
            HashAlgorithm::Sha256
        );
        assert_eq!(
            HashAlgorithm::from_str(" md5 ").unwrap(),
            HashAlgorithm::Md5
        );
        assert!(HashAlgorithm::from_str("rot13").is_err());
    }
}

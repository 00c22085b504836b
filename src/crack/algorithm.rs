// Algorithm definitions
// Closed set of supported digest algorithms and their descriptors

use md4::Md4;
use md5::{Digest as _, Md5};
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Digest sizes in bytes
pub const MD4_DIGEST_LENGTH: usize = 16;
pub const MD5_DIGEST_LENGTH: usize = 16;
pub const RIPEMD160_DIGEST_LENGTH: usize = 20;
pub const SHA1_DIGEST_LENGTH: usize = 20;
pub const SHA224_DIGEST_LENGTH: usize = 28;
pub const SHA256_DIGEST_LENGTH: usize = 32;
pub const SHA384_DIGEST_LENGTH: usize = 48;
pub const SHA512_DIGEST_LENGTH: usize = 64;
/// SHA256-192 keeps the first 24 bytes (192 bits) of a SHA-256 digest
pub const SHA256_192_DIGEST_LENGTH: usize = 24;

/// One variant per supported algorithm, including the two composite
/// constructions. Dispatch is a pattern match, so every descriptor has
/// exactly one compute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md4,
    Md5,
    Ripemd160,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    /// SHA-1 over the raw MD5 digest of the input (not its hex form)
    Md5Sha1,
    /// SHA-256 truncated to its first 24 raw bytes
    Sha256_192,
}

impl HashAlgorithm {
    /// Compute the digest of `data`. Always returns exactly
    /// `self.digest_length()` bytes, for any input including the empty one.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md4 => Md4::digest(data).to_vec(),
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Ripemd160 => Ripemd160::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Md5Sha1 => {
                // Chain on the raw digest bytes, never on hex text
                let inner = Md5::digest(data);
                Sha1::digest(inner.as_slice()).to_vec()
            }
            HashAlgorithm::Sha256_192 => {
                let full = Sha256::digest(data);
                full[..SHA256_192_DIGEST_LENGTH].to_vec()
            }
        }
    }

    /// Output size in bytes
    pub fn digest_length(&self) -> usize {
        match self {
            HashAlgorithm::Md4 => MD4_DIGEST_LENGTH,
            HashAlgorithm::Md5 => MD5_DIGEST_LENGTH,
            HashAlgorithm::Ripemd160 => RIPEMD160_DIGEST_LENGTH,
            HashAlgorithm::Sha1 => SHA1_DIGEST_LENGTH,
            HashAlgorithm::Sha224 => SHA224_DIGEST_LENGTH,
            HashAlgorithm::Sha256 => SHA256_DIGEST_LENGTH,
            HashAlgorithm::Sha384 => SHA384_DIGEST_LENGTH,
            HashAlgorithm::Sha512 => SHA512_DIGEST_LENGTH,
            HashAlgorithm::Md5Sha1 => SHA1_DIGEST_LENGTH,
            HashAlgorithm::Sha256_192 => SHA256_192_DIGEST_LENGTH,
        }
    }
}

/// Immutable record describing one registry entry
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub id: usize,
    pub digest_length: usize,
    pub algorithm: HashAlgorithm,
}

impl AlgorithmDescriptor {
    /// Compute the digest of `data` with this descriptor's algorithm
    pub fn compute(&self, data: &[u8]) -> Vec<u8> {
        self.algorithm.digest(data)
    }
}

// Algorithm registry
// Fixed catalog of supported algorithms with lookup by index or name

use super::algorithm::{
    AlgorithmDescriptor, HashAlgorithm, MD4_DIGEST_LENGTH, MD5_DIGEST_LENGTH,
    RIPEMD160_DIGEST_LENGTH, SHA1_DIGEST_LENGTH, SHA224_DIGEST_LENGTH, SHA256_192_DIGEST_LENGTH,
    SHA256_DIGEST_LENGTH, SHA384_DIGEST_LENGTH, SHA512_DIGEST_LENGTH,
};
use super::error::CrackError;

/// Catalog of supported algorithms. Built once, never mutated; `id` always
/// equals the array position.
pub static ALGORITHMS: [AlgorithmDescriptor; 10] = [
    AlgorithmDescriptor {
        name: "MD4",
        description: "MD4 message digest",
        id: 0,
        digest_length: MD4_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Md4,
    },
    AlgorithmDescriptor {
        name: "MD5",
        description: "MD5 message digest",
        id: 1,
        digest_length: MD5_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Md5,
    },
    AlgorithmDescriptor {
        name: "RIPEMD160",
        description: "RIPEMD-160 message digest",
        id: 2,
        digest_length: RIPEMD160_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Ripemd160,
    },
    AlgorithmDescriptor {
        name: "SHA1",
        description: "SHA-1 secure hash",
        id: 3,
        digest_length: SHA1_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Sha1,
    },
    AlgorithmDescriptor {
        name: "SHA224",
        description: "SHA-224 secure hash",
        id: 4,
        digest_length: SHA224_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Sha224,
    },
    AlgorithmDescriptor {
        name: "SHA256",
        description: "SHA-256 secure hash",
        id: 5,
        digest_length: SHA256_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Sha256,
    },
    AlgorithmDescriptor {
        name: "SHA384",
        description: "SHA-384 secure hash",
        id: 6,
        digest_length: SHA384_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Sha384,
    },
    AlgorithmDescriptor {
        name: "SHA512",
        description: "SHA-512 secure hash",
        id: 7,
        digest_length: SHA512_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Sha512,
    },
    AlgorithmDescriptor {
        name: "MD5-SHA1",
        description: "SHA-1 over the raw MD5 digest",
        id: 8,
        digest_length: SHA1_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Md5Sha1,
    },
    AlgorithmDescriptor {
        name: "SHA256-192",
        description: "SHA-256 truncated to 192 bits",
        id: 9,
        digest_length: SHA256_192_DIGEST_LENGTH,
        algorithm: HashAlgorithm::Sha256_192,
    },
];

/// Summary row for display listings
#[derive(Debug, Clone)]
pub struct AlgorithmInfo {
    pub index: usize,
    pub name: &'static str,
    pub id: usize,
    pub digest_length: usize,
    pub description: &'static str,
}

/// Read-only lookup over the fixed algorithm catalog
pub struct AlgorithmRegistry;

impl AlgorithmRegistry {
    /// Resolve a selector to a descriptor. A selector that parses entirely
    /// as a non-negative integer is treated as an index; anything else is
    /// matched case-insensitively against algorithm names.
    pub fn resolve(selector: &str) -> Result<&'static AlgorithmDescriptor, CrackError> {
        if let Ok(index) = selector.parse::<usize>() {
            return ALGORITHMS
                .get(index)
                .ok_or_else(|| CrackError::UnknownAlgorithm {
                    selector: selector.to_string(),
                });
        }

        ALGORITHMS
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(selector))
            .ok_or_else(|| CrackError::UnknownAlgorithm {
                selector: selector.to_string(),
            })
    }

    /// List all supported algorithms in registry order
    pub fn list() -> Vec<AlgorithmInfo> {
        ALGORITHMS
            .iter()
            .enumerate()
            .map(|(index, descriptor)| AlgorithmInfo {
                index,
                name: descriptor.name,
                id: descriptor.id,
                digest_length: descriptor.digest_length,
                description: descriptor.description,
            })
            .collect()
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

use blake2::{Blake2b512, Blake2s256};
use digest::consts::U32;
use digest::Digest;
use num_bigint::BigUint;
use sha2::{Sha256, Sha384, Sha512};

use crate::types::{SrpError, SrpResult};

/// BLAKE2b truncated to a 32-byte digest.
type Blake2b256 = blake2::Blake2b<U32>;

/// Hash algorithms an [`SrpEnvironment`](crate::environment::SrpEnvironment)
/// can be built over.
///
/// Each algorithm carries a stable numeric tag that is serialized inside
/// verifier records; tags never change and new algorithms only ever append
/// new numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256, tag 5.
    Sha256,
    /// SHA-384, tag 6.
    Sha384,
    /// SHA-512, tag 7.
    Sha512,
    /// BLAKE2s-256, tag 16.
    Blake2s256,
    /// BLAKE2b-256, tag 17. The default.
    Blake2b256,
    /// BLAKE2b-512, tag 19.
    Blake2b512,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Blake2b256
    }
}

impl HashAlgorithm {
    /// The stable numeric tag serialized inside verifier records.
    pub const fn tag(self) -> u32 {
        match self {
            HashAlgorithm::Sha256 => 5,
            HashAlgorithm::Sha384 => 6,
            HashAlgorithm::Sha512 => 7,
            HashAlgorithm::Blake2s256 => 16,
            HashAlgorithm::Blake2b256 => 17,
            HashAlgorithm::Blake2b512 => 19,
        }
    }

    /// Resolves a numeric tag back to its algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::UnknownHashAlgorithm`] if the tag names no
    /// available algorithm.
    pub fn from_tag(tag: u32) -> SrpResult<Self> {
        match tag {
            5 => Ok(HashAlgorithm::Sha256),
            6 => Ok(HashAlgorithm::Sha384),
            7 => Ok(HashAlgorithm::Sha512),
            16 => Ok(HashAlgorithm::Blake2s256),
            17 => Ok(HashAlgorithm::Blake2b256),
            19 => Ok(HashAlgorithm::Blake2b512),
            _ => Err(SrpError::UnknownHashAlgorithm(tag)),
        }
    }

    /// Digest size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Blake2s256 | HashAlgorithm::Blake2b256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Blake2b512 => 64,
        }
    }

    /// Digest of the chunks, concatenated in order.
    pub fn digest(self, chunks: &[&[u8]]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => digest_chunks::<Sha256>(chunks),
            HashAlgorithm::Sha384 => digest_chunks::<Sha384>(chunks),
            HashAlgorithm::Sha512 => digest_chunks::<Sha512>(chunks),
            HashAlgorithm::Blake2s256 => digest_chunks::<Blake2s256>(chunks),
            HashAlgorithm::Blake2b256 => digest_chunks::<Blake2b256>(chunks),
            HashAlgorithm::Blake2b512 => digest_chunks::<Blake2b512>(chunks),
        }
    }

    /// Digest of the chunks, interpreted as a big-endian unsigned integer.
    pub fn digest_int(self, chunks: &[&[u8]]) -> BigUint {
        BigUint::from_bytes_be(&self.digest(chunks))
    }
}

fn digest_chunks<D: Digest>(chunks: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    hasher.finalize().to_vec()
}

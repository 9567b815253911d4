// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

use num_bigint::BigUint;

use crate::groups::{prime_field, PrimeField};
use crate::hash::HashAlgorithm;
use crate::types::SrpResult;

/// The parameters client and server sessions are spawned from: a hash
/// algorithm and a prime field.
///
/// Both peers must share an equal environment or the exchange fails at the
/// proof step. Environments are read-only and cheap to clone; the prime
/// field itself is a static borrow from the registry.
#[derive(Debug, Clone)]
pub struct SrpEnvironment {
    hash: HashAlgorithm,
    field: &'static PrimeField,
}

impl SrpEnvironment {
    /// Creates an environment over a `bits`-wide prime field with the
    /// default BLAKE2b-256 hash.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::UnsupportedFieldSize`](crate::types::SrpError)
    /// for an unregistered width.
    pub fn new(bits: usize) -> SrpResult<Self> {
        Self::with_hash(HashAlgorithm::default(), bits)
    }

    /// Creates an environment with an explicit hash algorithm.
    pub fn with_hash(hash: HashAlgorithm, bits: usize) -> SrpResult<Self> {
        Ok(Self {
            hash,
            field: prime_field(bits)?,
        })
    }

    /// The prime-field size in bits.
    pub fn field_size(&self) -> usize {
        self.field.bytes * 8
    }

    /// The hash algorithm in use.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// The prime-field group in use.
    pub fn field(&self) -> &'static PrimeField {
        self.field
    }

    /// Digest of the chunks, concatenated in order.
    pub fn hash_bytes(&self, chunks: &[&[u8]]) -> Vec<u8> {
        self.hash.digest(chunks)
    }

    /// Digest of the chunks as a big-endian unsigned integer.
    pub fn hash_int(&self, chunks: &[&[u8]]) -> BigUint {
        self.hash.digest_int(chunks)
    }
}

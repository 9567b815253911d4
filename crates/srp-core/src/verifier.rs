// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::random_bytes;
use crate::environment::SrpEnvironment;
use crate::groups::prime_field;
use crate::hash::HashAlgorithm;
use crate::types::{SrpError, SrpResult};

/// The server-side password record: hashed identity, salt, verifier value,
/// and the parameters needed to rebuild a matching environment.
///
/// A verifier is created once at user registration, encoded for durable
/// storage, and reconstituted on every authentication. It holds `v = g^x`
/// but neither `x` nor anything password-equivalent.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Verifier {
    identity: Vec<u8>,
    salt: Vec<u8>,
    verifier: Vec<u8>,
    #[zeroize(skip)]
    hash: HashAlgorithm,
    #[zeroize(skip)]
    field_bytes: usize,
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("hash", &self.hash)
            .field("field_bytes", &self.field_bytes)
            .finish_non_exhaustive()
    }
}

impl SrpEnvironment {
    /// Builds a password verifier for `identity` and `password`.
    ///
    /// Hashes both inputs, draws a fresh salt as wide as the prime field,
    /// and computes `v = g^x mod N` with `x = H(I, p, s)`. Neither the raw
    /// password nor `x` survives the call.
    pub fn verifier(&self, identity: &[u8], password: &[u8]) -> Verifier {
        let field = self.field();
        let identity = self.hash_bytes(&[identity]);
        let password = self.hash_bytes(&[password]);
        let salt = random_bytes(field.bytes);
        let x = self.hash_int(&[&identity, &password, &salt]);
        let v = field.g.modpow(&x, &field.n);

        Verifier {
            identity,
            salt,
            verifier: v.to_bytes_be(),
            hash: self.hash(),
            field_bytes: field.bytes,
        }
    }
}

impl Verifier {
    /// The hashed identity; servers store records keyed by its hex form.
    pub fn identity(&self) -> &[u8] {
        &self.identity
    }

    /// The per-user salt, as wide as the prime field.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The verifier value `v` in minimal big-endian bytes.
    pub fn value(&self) -> &[u8] {
        &self.verifier
    }

    /// The hash algorithm the record was built with.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Byte width of the prime field the record was built over.
    pub fn field_bytes(&self) -> usize {
        self.field_bytes
    }

    /// Encodes the record for durable storage.
    ///
    /// Returns the hex identity (the storage key a client will present) and
    /// the record string `"n:h:hex(I):hex(s):hex(v)"` where `n` is the
    /// prime-field byte width and `h` the numeric hash tag, both decimal.
    pub fn encode(&self) -> (String, String) {
        let identity = hex::encode(&self.identity);
        let record = format!(
            "{}:{}:{}:{}:{}",
            self.field_bytes,
            self.hash.tag(),
            identity,
            hex::encode(&self.salt),
            hex::encode(&self.verifier),
        );
        (identity, record)
    }

    /// Decodes a record produced by [`Verifier::encode`].
    ///
    /// The record carries everything needed to rebuild the environment it
    /// was created under, so a server can be constructed from storage alone.
    /// Hex fields decode case-insensitively.
    ///
    /// # Errors
    ///
    /// Each malformation is distinct: wrong field count, non-positive or
    /// unparseable byte width, unregistered field size, non-positive or
    /// unparseable hash tag, unavailable hash algorithm, and invalid hex in
    /// the identity, salt, or verifier field.
    pub fn decode(record: &str) -> SrpResult<(SrpEnvironment, Verifier)> {
        let fields: Vec<&str> = record.split(':').collect();
        if fields.len() != 5 {
            return Err(SrpError::MalformedVerifier(fields.len()));
        }

        let field_bytes: usize = fields[0]
            .parse()
            .map_err(|_| SrpError::InvalidFieldSize(fields[0].to_string()))?;
        if field_bytes == 0 {
            return Err(SrpError::InvalidFieldSize(fields[0].to_string()));
        }
        prime_field(field_bytes * 8)?;

        let tag: u32 = fields[1]
            .parse()
            .map_err(|_| SrpError::InvalidHashTag(fields[1].to_string()))?;
        if tag == 0 {
            return Err(SrpError::InvalidHashTag(fields[1].to_string()));
        }
        let hash = HashAlgorithm::from_tag(tag)?;

        let identity = hex::decode(fields[2]).map_err(|_| SrpError::InvalidHex("identity"))?;
        let salt = hex::decode(fields[3]).map_err(|_| SrpError::InvalidHex("salt"))?;
        let verifier = hex::decode(fields[4]).map_err(|_| SrpError::InvalidHex("verifier"))?;

        let environment = SrpEnvironment::with_hash(hash, field_bytes * 8)?;
        Ok((
            environment,
            Verifier {
                identity,
                salt,
                verifier,
                hash,
                field_bytes,
            },
        ))
    }
}

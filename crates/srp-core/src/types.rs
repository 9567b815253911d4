// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

use subtle::ConstantTimeEq;
use thiserror::Error;

/// Errors reported by the SRP crates.
///
/// The two session-level kinds are deliberately coarse: every failure while
/// processing a peer's credentials collapses to the matching
/// `Invalid*PublicKey` variant so that a probing peer learns nothing about
/// which check tripped. The verifier record codec, by contrast, reports a
/// distinct variant per malformation; records come from trusted storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SrpError {
    /// The requested bit width has no registered prime field.
    #[error("unsupported prime-field size: {0} bits")]
    UnsupportedFieldSize(usize),
    /// The numeric hash tag names no available algorithm.
    #[error("unknown hash algorithm: tag {0}")]
    UnknownHashAlgorithm(u32),
    /// A verifier record did not split into exactly five fields.
    #[error("verifier: malformed record, expected 5 fields, found {0}")]
    MalformedVerifier(usize),
    /// The field-size field of a verifier record is not a positive decimal.
    #[error("verifier: malformed field size {0:?}")]
    InvalidFieldSize(String),
    /// The hash-tag field of a verifier record is not a positive decimal.
    #[error("verifier: malformed hash tag {0:?}")]
    InvalidHashTag(String),
    /// A hex field of a verifier record failed to decode.
    #[error("verifier: invalid {0} hex")]
    InvalidHex(&'static str),
    /// The client's public credentials were rejected.
    #[error("invalid client public key")]
    InvalidClientPublicKey,
    /// The server's public credentials were rejected.
    #[error("invalid server public key")]
    InvalidServerPublicKey,
    /// A session operation was invoked out of order.
    #[error("session operation invoked out of order")]
    InvalidState,
}

/// Result alias used across the SRP crates.
pub type SrpResult<T> = Result<T, SrpError>;

/// Length-safe constant-time equality over byte slices.
///
/// Slices of different lengths compare unequal without inspecting content.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}

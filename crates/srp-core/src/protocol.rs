// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

//! Codec for the two hello messages.
//!
//! Both messages are `:`-separated ASCII with lowercase hex fields. Integer
//! fields travel in their minimal width; only the salt has a fixed width.
//! Parse failures collapse to one opaque error per direction so a probing
//! peer cannot distinguish which check rejected its message.

use num_bigint::BigUint;

use crate::types::{SrpError, SrpResult};

/// First protocol message, `"hex(I):hex(A)"`.
pub fn write_client_hello(identity: &[u8], a_pub: &BigUint) -> String {
    format!(
        "{}:{}",
        hex::encode(identity),
        hex::encode(a_pub.to_bytes_be())
    )
}

/// Splits a client hello into the hashed identity and the client public key.
///
/// The identity is the key under which the server looks up the stored
/// verifier record.
///
/// # Errors
///
/// Every malformation returns [`SrpError::InvalidClientPublicKey`].
pub fn parse_client_hello(hello: &str) -> SrpResult<(Vec<u8>, BigUint)> {
    let fields: Vec<&str> = hello.split(':').collect();
    if fields.len() != 2 {
        return Err(SrpError::InvalidClientPublicKey);
    }
    let identity = hex::decode(fields[0]).map_err(|_| SrpError::InvalidClientPublicKey)?;
    let a_pub = BigUint::parse_bytes(fields[1].as_bytes(), 16)
        .ok_or(SrpError::InvalidClientPublicKey)?;
    Ok((identity, a_pub))
}

/// Second protocol message, `"hex(s):hex(B)"`.
pub fn write_server_hello(salt: &[u8], b_pub: &BigUint) -> String {
    format!(
        "{}:{}",
        hex::encode(salt),
        hex::encode(b_pub.to_bytes_be())
    )
}

/// Splits a server hello into the salt and the server public key.
///
/// # Errors
///
/// Every malformation returns [`SrpError::InvalidServerPublicKey`].
pub fn parse_server_hello(hello: &str) -> SrpResult<(Vec<u8>, BigUint)> {
    let fields: Vec<&str> = hello.split(':').collect();
    if fields.len() != 2 {
        return Err(SrpError::InvalidServerPublicKey);
    }
    let salt = hex::decode(fields[0]).map_err(|_| SrpError::InvalidServerPublicKey)?;
    let b_pub = BigUint::parse_bytes(fields[1].as_bytes(), 16)
        .ok_or(SrpError::InvalidServerPublicKey)?;
    Ok((salt, b_pub))
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

use num_bigint::BigUint;
use rand_core::{OsRng, RngCore};

/// Big-endian bytes of `x`, left-padded with zeros to exactly `n` bytes.
///
/// A value wider than `n` bytes is returned in its natural width; that case
/// does not arise for values reduced modulo the prime.
pub fn pad(x: &BigUint, n: usize) -> Vec<u8> {
    let bytes = x.to_bytes_be();
    if bytes.len() >= n {
        return bytes;
    }
    let mut padded = vec![0u8; n];
    padded[n - bytes.len()..].copy_from_slice(&bytes);
    padded
}

/// `n` bytes from the operating-system cryptographic RNG.
///
/// # Panics
///
/// Panics if the randomness source fails; no authentication may proceed on
/// weak randomness.
pub fn random_bytes(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// A random unsigned integer drawn as `bits/8` (rounded up) random bytes.
pub fn random_biguint(bits: usize) -> BigUint {
    BigUint::from_bytes_be(&random_bytes((bits + 7) / 8))
}

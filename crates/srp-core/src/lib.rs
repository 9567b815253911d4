// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange
// Licensed under the MIT License

//! Core library for the SRP-6a password-authenticated key exchange.
//!
//! Implements the shared half of the protocol: the prime-field registry
//! (RFC-5054 groups from 1024 to 8192 bits), the runtime-selectable hash
//! engine, the environment both peers are spawned from, the server-side
//! password verifier with its portable record format, and the codec for the
//! `:`-separated wire messages. The client and server session engines live
//! in the `srp-client` and `srp-server` crates.
//!
//! # Crate layout
//!
//! * [`types`] -- error types and the constant-time comparison helper.
//! * [`groups`] -- the process-wide prime-field registry.
//! * [`hash`] -- selectable hash algorithms with stable numeric tags.
//! * [`crypto`] -- padding and randomness helpers.
//! * [`environment`] -- the `(hash, group)` pair shared by both peers.
//! * [`verifier`] -- password verifier creation and its record codec.
//! * [`protocol`] -- parsing and writing of the hello messages.

/// Padding and randomness helpers.
pub mod crypto;
/// The `(hash, group)` environment shared by client and server.
pub mod environment;
/// Process-wide registry of RFC-5054 prime-field groups.
pub mod groups;
/// Selectable hash algorithms with stable numeric tags.
pub mod hash;
/// Parsing and writing of the hello messages.
pub mod protocol;
/// Error types and the constant-time comparison helper.
pub mod types;
/// Password verifier creation and its portable record codec.
pub mod verifier;

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange Server
// Licensed under the MIT License

//! SRP-6a server session engine.
//!
//! A [`SrpServer`] is built from a stored [`Verifier`](srp_core::verifier::Verifier)
//! record and the client's public ephemeral; the whole server-side
//! derivation happens at construction. It then emits the server hello and
//! validates the client's proof, releasing its own proof only after the
//! client's has verified. Sessions are single-use and a failed session
//! never discloses the server proof.

/// Server-side authentication flow.
mod authentication;
/// Session state and phase tracking.
mod state;

pub use srp_core::protocol::parse_client_hello;
pub use state::{ServerPhase, SrpServer};

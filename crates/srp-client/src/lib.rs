// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange Client
// Licensed under the MIT License

//! SRP-6a client session engine.
//!
//! A [`SrpClient`] drives one authentication: it emits the client hello,
//! processes the server hello into a session key and proof, and verifies
//! the server's counter-proof. Sessions are single-use; the phase tracker
//! rejects out-of-order operations and a failed session stays failed.

/// Client-side authentication flow.
mod authentication;
/// Session state and phase tracking.
mod state;

pub use state::{ClientPhase, SrpClient};

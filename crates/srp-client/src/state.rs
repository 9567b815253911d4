// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange Client
// Licensed under the MIT License

use std::fmt;

use num_bigint::BigUint;
use srp_core::crypto::{pad, random_biguint};
use srp_core::environment::SrpEnvironment;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Tracks which protocol step a client session is in.
///
/// Enforces that session operations run in order: credentials, then
/// generate, then server verification. Failure states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPhase {
    /// Session created; the client hello has not been produced yet.
    Created,
    /// `credentials` has been produced; awaiting the server hello.
    HelloSent,
    /// `generate` has completed; the proof and session key are available.
    ProofGenerated,
    /// The server's proof verified; the exchange is complete.
    Verified,
    /// A protocol abort or failed verification. Terminal.
    Failed,
}

/// Client-side session state for a single authentication.
///
/// Holds the hashed identity and password, the secret ephemeral `a`, the
/// public `A = g^a mod N`, and the multiplier `k`, then the session key and
/// proof once the server hello has been processed. Byte-string secrets are
/// zeroized on drop. A session never outlives the authentication it was
/// created for.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SrpClient {
    #[zeroize(skip)]
    pub(crate) environment: SrpEnvironment,
    #[zeroize(skip)]
    pub(crate) phase: ClientPhase,
    pub(crate) identity: Vec<u8>,
    pub(crate) password: Vec<u8>,
    #[zeroize(skip)]
    pub(crate) a: BigUint,
    #[zeroize(skip)]
    pub(crate) a_pub: BigUint,
    #[zeroize(skip)]
    pub(crate) k: BigUint,
    pub(crate) session_key: Vec<u8>,
    pub(crate) proof: Vec<u8>,
}

impl SrpClient {
    /// Creates a client session for `identity` and `password`.
    ///
    /// Both inputs are hashed immediately; the raw password does not
    /// survive the call. The secret ephemeral `a` is drawn at the full
    /// byte width of the prime field, and `A = g^a mod N` and the
    /// multiplier `k = H(N, pad(g, n))` are computed up front.
    pub fn new(environment: &SrpEnvironment, identity: &[u8], password: &[u8]) -> Self {
        let field = environment.field();
        let identity = environment.hash_bytes(&[identity]);
        let password = environment.hash_bytes(&[password]);
        let a = random_biguint(field.bytes * 8);
        let a_pub = field.g.modpow(&a, &field.n);
        let k = environment.hash_int(&[&field.n.to_bytes_be(), &pad(&field.g, field.bytes)]);

        Self {
            environment: environment.clone(),
            phase: ClientPhase::Created,
            identity,
            password,
            a,
            a_pub,
            k,
            session_key: Vec::new(),
            proof: Vec::new(),
        }
    }

    /// The session's current phase.
    pub fn phase(&self) -> ClientPhase {
        self.phase
    }
}

impl fmt::Display for SrpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.environment.field();
        write!(
            f,
            "<client> g={}, N={:x}, I={}, A={:x}",
            field.g,
            field.n,
            hex::encode(&self.identity),
            self.a_pub,
        )
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange Server
// Licensed under the MIT License

use std::fmt;

use num_bigint::BigUint;
use srp_core::environment::SrpEnvironment;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Tracks which protocol step a server session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerPhase {
    /// Construction succeeded; the server hello has not been produced yet.
    Ready,
    /// `credentials` has been produced; awaiting the client proof.
    AwaitingProof,
    /// The client proof verified and the server proof was released.
    ProofSent,
    /// The client proof did not verify. Terminal; derived material is gone.
    Failed,
}

/// Server-side session state for a single authentication.
///
/// Populated up front at construction: the public `B`, the session key, and
/// the expected client proof. Byte-string secrets are zeroized on drop, and
/// eagerly on proof mismatch.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SrpServer {
    #[zeroize(skip)]
    pub(crate) environment: SrpEnvironment,
    #[zeroize(skip)]
    pub(crate) phase: ServerPhase,
    pub(crate) identity: Vec<u8>,
    pub(crate) salt: Vec<u8>,
    #[zeroize(skip)]
    pub(crate) b_pub: BigUint,
    pub(crate) session_key: Vec<u8>,
    pub(crate) proof: Vec<u8>,
}

impl SrpServer {
    /// The session's current phase.
    pub fn phase(&self) -> ServerPhase {
        self.phase
    }
}

impl fmt::Display for SrpServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.environment.field();
        write!(
            f,
            "<server> g={}, N={:x}, I={}, s={}, B={:x}",
            field.g,
            field.n,
            hex::encode(&self.identity),
            hex::encode(&self.salt),
            self.b_pub,
        )
    }
}

impl fmt::Debug for SrpServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SrpServer")
            .field("phase", &self.phase)
            .field("identity", &hex::encode(&self.identity))
            .finish_non_exhaustive()
    }
}

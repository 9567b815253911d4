// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange Server
// Licensed under the MIT License

use num_bigint::BigUint;
use num_traits::Zero;
use srp_core::crypto::{pad, random_biguint};
use srp_core::environment::SrpEnvironment;
use srp_core::protocol;
use srp_core::types::{constant_time_eq, SrpError, SrpResult};
use srp_core::verifier::Verifier;
use tracing::debug;
use zeroize::Zeroize;

use crate::state::{ServerPhase, SrpServer};

impl SrpServer {
    /// Builds a server session from a stored verifier and the client's `A`.
    ///
    /// The whole server-side derivation happens here: a fresh secret
    /// ephemeral `b`, `B = (k·v + g^b) mod N`, the scrambler
    /// `u = H(pad(A, n), pad(B, n))`, the shared secret
    /// `S = (A·v^u)^b mod N`, the session key `K = H(S)`, and the expected
    /// client proof `M = H(K, A, B, I, s, N, g)`.
    ///
    /// # Errors
    ///
    /// Rejects `A ≡ 0 (mod N)` and a zero scrambler, both as the opaque
    /// [`SrpError::InvalidClientPublicKey`]; no session state is created.
    pub fn new(
        environment: &SrpEnvironment,
        verifier: &Verifier,
        a_pub: &BigUint,
    ) -> SrpResult<Self> {
        let field = environment.field();
        let n = &field.n;

        if (a_pub % n).is_zero() {
            return Err(SrpError::InvalidClientPublicKey);
        }

        let v = BigUint::from_bytes_be(verifier.value());
        let b = random_biguint(field.bytes * 8);
        let k = environment.hash_int(&[&n.to_bytes_be(), &pad(&field.g, field.bytes)]);
        let b_pub = (&k * &v + field.g.modpow(&b, n)) % n;

        let u = environment.hash_int(&[&pad(a_pub, field.bytes), &pad(&b_pub, field.bytes)]);
        if u.is_zero() {
            return Err(SrpError::InvalidClientPublicKey);
        }

        // S = (A * v^u) ^ b mod N
        let secret = (a_pub * v.modpow(&u, n)).modpow(&b, n);

        let session_key = environment.hash_bytes(&[&secret.to_bytes_be()]);
        let proof = environment.hash_bytes(&[
            &session_key,
            &a_pub.to_bytes_be(),
            &b_pub.to_bytes_be(),
            verifier.identity(),
            verifier.salt(),
            &n.to_bytes_be(),
            &field.g.to_bytes_be(),
        ]);

        debug!(bits = field.bytes * 8, "server session derived");

        Ok(Self {
            environment: environment.clone(),
            phase: ServerPhase::Ready,
            identity: verifier.identity().to_vec(),
            salt: verifier.salt().to_vec(),
            b_pub,
            session_key,
            proof,
        })
    }

    /// Second message of the exchange, `"hex(s):hex(B)"`.
    ///
    /// The salt travels at the full prime-field width; `B` in its minimal
    /// width.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidState`] unless construction just
    /// completed.
    pub fn credentials(&mut self) -> SrpResult<String> {
        if self.phase != ServerPhase::Ready {
            return Err(SrpError::InvalidState);
        }
        self.phase = ServerPhase::AwaitingProof;
        Ok(protocol::write_server_hello(&self.salt, &self.b_pub))
    }

    /// Verifies the client's proof and, only on success, releases the
    /// server's own proof `hex(H(K, M))`.
    ///
    /// The client must prove first: on mismatch the derived material is
    /// zeroized, the session fails terminally, and the reply is
    /// `("", false)`. No later call yields the server proof for this
    /// session.
    pub fn client_ok(&mut self, proof: &str) -> (String, bool) {
        if self.phase != ServerPhase::AwaitingProof {
            return (String::new(), false);
        }
        let expected = hex::encode(&self.proof);
        if !constant_time_eq(expected.as_bytes(), proof.as_bytes()) {
            debug!("client proof mismatch");
            self.session_key.zeroize();
            self.proof.zeroize();
            self.phase = ServerPhase::Failed;
            return (String::new(), false);
        }
        let reply = self
            .environment
            .hash_bytes(&[&self.session_key, &self.proof]);
        self.phase = ServerPhase::ProofSent;
        (hex::encode(reply), true)
    }

    /// The negotiated session key `K`.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidState`] after a failed verification, once
    /// the derived material has been destroyed.
    pub fn raw_key(&self) -> SrpResult<&[u8]> {
        if self.session_key.is_empty() {
            return Err(SrpError::InvalidState);
        }
        Ok(&self.session_key)
    }
}

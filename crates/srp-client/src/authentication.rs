// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Key Exchange Client
// Licensed under the MIT License

use num_traits::Zero;
use srp_core::crypto::pad;
use srp_core::protocol;
use srp_core::types::{constant_time_eq, SrpError, SrpResult};
use tracing::debug;

use crate::state::{ClientPhase, SrpClient};

impl SrpClient {
    /// First message of the exchange, `"hex(I):hex(A)"`.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidState`] unless the session is fresh.
    pub fn credentials(&mut self) -> SrpResult<String> {
        if self.phase != ClientPhase::Created {
            return Err(SrpError::InvalidState);
        }
        self.phase = ClientPhase::HelloSent;
        Ok(protocol::write_client_hello(&self.identity, &self.a_pub))
    }

    /// Processes the server hello `"hex(s):hex(B)"` and returns the client
    /// proof `hex(M)`.
    ///
    /// Rejects `B ≡ 0 (mod N)` and a zero scrambler, then derives the
    /// shared secret `S = (B - k·g^x)^(a + u·x) mod N`, the session key
    /// `K = H(S)`, and the proof `M = H(K, A, B, I, s, N, g)`.
    ///
    /// # Errors
    ///
    /// Every failure, parse or protocol, is the same opaque
    /// [`SrpError::InvalidServerPublicKey`] and leaves the session
    /// terminally failed.
    pub fn generate(&mut self, server_hello: &str) -> SrpResult<String> {
        if self.phase != ClientPhase::HelloSent {
            return Err(SrpError::InvalidState);
        }
        match self.derive(server_hello) {
            Ok(proof) => {
                self.phase = ClientPhase::ProofGenerated;
                Ok(proof)
            }
            Err(_) => {
                debug!("rejecting server credentials");
                self.phase = ClientPhase::Failed;
                Err(SrpError::InvalidServerPublicKey)
            }
        }
    }

    fn derive(&mut self, server_hello: &str) -> SrpResult<String> {
        let field = self.environment.field();
        let n = &field.n;
        let (salt, b_pub) = protocol::parse_server_hello(server_hello)?;

        if (&b_pub % n).is_zero() {
            return Err(SrpError::InvalidServerPublicKey);
        }

        let u = self.environment.hash_int(&[
            &pad(&self.a_pub, field.bytes),
            &pad(&b_pub, field.bytes),
        ]);
        if u.is_zero() {
            return Err(SrpError::InvalidServerPublicKey);
        }

        // S = (B - k*g^x) ^ (a + u*x) mod N
        let x = self
            .environment
            .hash_int(&[&self.identity, &self.password, &salt]);
        let kgx = (&self.k * field.g.modpow(&x, n)) % n;
        // shift the base into [0, N) before exponentiating
        let base = ((&b_pub % n) + n - kgx) % n;
        let exponent = &self.a + &u * &x;
        let secret = base.modpow(&exponent, n);

        self.session_key = self.environment.hash_bytes(&[&secret.to_bytes_be()]);
        self.proof = self.environment.hash_bytes(&[
            &self.session_key,
            &self.a_pub.to_bytes_be(),
            &b_pub.to_bytes_be(),
            &self.identity,
            &salt,
            &n.to_bytes_be(),
            &field.g.to_bytes_be(),
        ]);

        Ok(hex::encode(&self.proof))
    }

    /// Verifies the server's proof `Z = H(K, M)`.
    ///
    /// Constant-time comparison over the hex form. Returns `false` on any
    /// mismatch, including out-of-order invocation; never errors.
    pub fn server_ok(&mut self, proof: &str) -> bool {
        if self.phase != ClientPhase::ProofGenerated {
            return false;
        }
        let expected = self
            .environment
            .hash_bytes(&[&self.session_key, &self.proof]);
        let ok = constant_time_eq(hex::encode(expected).as_bytes(), proof.as_bytes());
        if ok {
            self.phase = ClientPhase::Verified;
        } else {
            debug!("server proof mismatch");
            self.phase = ClientPhase::Failed;
        }
        ok
    }

    /// The negotiated session key `K`.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidState`] before [`generate`](Self::generate)
    /// has succeeded.
    pub fn raw_key(&self) -> SrpResult<&[u8]> {
        if self.session_key.is_empty() {
            return Err(SrpError::InvalidState);
        }
        Ok(&self.session_key)
    }
}

use std::time::{Duration, SystemTime};

use tracing::debug;

use rune_core::settings::settings;

use super::{Verifier, VerifyError, VerifyRequest};

/// Proof of a successful verification, valid in `[issued_at, expires_at)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePass {
    pub issued_at: SystemTime,
    pub expires_at: SystemTime,
}

impl GatePass {
    pub fn issue(now: SystemTime, ttl: Duration) -> Self {
        Self {
            issued_at: now,
            expires_at: now.checked_add(ttl).unwrap_or(now),
        }
    }

    pub fn is_valid_at(&self, now: SystemTime) -> bool {
        now >= self.issued_at && now < self.expires_at
    }
}

/// Holds the most recent pass.
#[derive(Debug, Default)]
pub struct PassStore {
    current: Option<GatePass>,
}

impl PassStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn valid_at(&self, now: SystemTime) -> Option<&GatePass> {
        self.current.as_ref().filter(|p| p.is_valid_at(now))
    }

    pub fn store(&mut self, pass: GatePass) {
        self.current = Some(pass);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// A verifier plus the pass it last issued.
pub struct Gate<V> {
    verifier: V,
    ttl: Duration,
    passes: PassStore,
}

impl<V: Verifier> Gate<V> {
    pub fn new(verifier: V, ttl: Duration) -> Self {
        Self {
            verifier,
            ttl,
            passes: PassStore::new(),
        }
    }

    /// Gate whose passes live for `settings().gate.pass_ttl_secs`.
    pub fn from_settings(verifier: V) -> Self {
        Self::new(verifier, settings().gate.pass_ttl())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn current_pass(&self, now: SystemTime) -> Option<&GatePass> {
        self.passes.valid_at(now)
    }

    /// Return the stored pass if still valid at `now`, otherwise verify
    /// `request` and store a fresh pass. Failures leave the store untouched.
    pub fn check(
        &mut self,
        request: &VerifyRequest,
        now: SystemTime,
    ) -> Result<GatePass, VerifyError> {
        if let Some(pass) = self.passes.valid_at(now) {
            debug!("reusing gate pass");
            return Ok(*pass);
        }
        self.verifier.verify(request)?;
        let pass = GatePass::issue(now, self.ttl);
        self.passes.store(pass);
        debug!(ttl_secs = self.ttl.as_secs(), "issued gate pass");
        Ok(pass)
    }

    /// Drop the stored pass; the next `check` goes upstream.
    pub fn revoke(&mut self) {
        self.passes.clear();
    }
}

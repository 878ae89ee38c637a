//! Human-verification gate in front of the keyboard.
//!
//! A [`Verifier`] checks a challenge token with an upstream service and
//! returns its [`Verdict`]. [`Gate`] remembers a successful verification as a
//! [`GatePass`] for a bounded time so that every request does not go upstream.

mod pass;
mod turnstile;


use serde::{Deserialize, Serialize};

pub use pass::{Gate, GatePass, PassStore};
pub use turnstile::{interpret_response, TurnstileVerifier, SECRET_ENV};

/// A token to verify, with the client address when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub token: String,
    pub remote_ip: Option<String>,
}

impl VerifyRequest {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            remote_ip: None,
        }
    }

    pub fn with_remote_ip(mut self, ip: impl Into<String>) -> Self {
        self.remote_ip = Some(ip.into());
        self
    }
}

/// Upstream siteverify answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub success: bool,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_ts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("server misconfigured: {0}")]
    ServerMisconfigured(String),

    #[error("verification rejected: [{}]", .0.join(", "))]
    Rejected(Vec<String>),

    #[error("transient network error: {0}")]
    TransientNetworkError(String),
}

impl VerifyError {
    /// Only network trouble is worth retrying; the rest are final answers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VerifyError::TransientNetworkError(_))
    }

    /// HTTP status a front end should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            VerifyError::InvalidRequest(_) => 400,
            VerifyError::ServerMisconfigured(_) => 500,
            VerifyError::Rejected(_) => 403,
            VerifyError::TransientNetworkError(_) => 502,
        }
    }
}

/// Checks a challenge token. Implementations may block on I/O.
pub trait Verifier {
    fn verify(&self, request: &VerifyRequest) -> Result<Verdict, VerifyError>;
}

impl<V: Verifier + ?Sized> Verifier for &V {
    fn verify(&self, request: &VerifyRequest) -> Result<Verdict, VerifyError> {
        (**self).verify(request)
    }
}

impl<V: Verifier + ?Sized> Verifier for Box<V> {
    fn verify(&self, request: &VerifyRequest) -> Result<Verdict, VerifyError> {
        (**self).verify(request)
    }
}

const PUBLIC_PREFIXES: &[&str] = &[
    "/_next",
    "/api/turnstile/verify",
    "/favicon",
    "/robots.txt",
    "/sitemap.xml",
];

/// Paths served without a pass: static assets and the verification
/// endpoint itself.
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

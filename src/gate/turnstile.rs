use std::time::Duration;

use tracing::{debug, debug_span};
use ureq::Agent;

use rune_core::settings::settings;

use super::{Verdict, Verifier, VerifyError, VerifyRequest};

/// Environment variable holding the siteverify secret.
pub const SECRET_ENV: &str = "TURNSTILE_SECRET_KEY";

/// Cloudflare Turnstile siteverify client.
pub struct TurnstileVerifier {
    agent: Agent,
    url: String,
    secret: Option<String>,
    expected_action: Option<String>,
}

impl TurnstileVerifier {
    /// `secret: None` builds a verifier that reports `ServerMisconfigured`
    /// for every well-formed request.
    pub fn new(url: impl Into<String>, secret: Option<String>, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            url: url.into(),
            secret: secret.filter(|s| !s.trim().is_empty()),
            expected_action: None,
        }
    }

    /// Verifier configured from `settings().gate`, with the secret read from
    /// [`SECRET_ENV`].
    pub fn from_env() -> Self {
        let gate = &settings().gate;
        let secret = std::env::var(SECRET_ENV).ok();
        Self::new(gate.siteverify_url.clone(), secret, gate.timeout())
            .with_expected_action(gate.expected_action().map(str::to_string))
    }

    pub fn with_expected_action(mut self, action: Option<String>) -> Self {
        self.expected_action = action;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    fn post(&self, secret: &str, request: &VerifyRequest) -> Result<String, VerifyError> {
        let mut form = vec![("secret", secret), ("response", request.token.as_str())];
        if let Some(ip) = request.remote_ip.as_deref().filter(|ip| !ip.is_empty()) {
            form.push(("remoteip", ip));
        }
        self.agent
            .post(&self.url)
            .send_form(form)
            .map_err(|e| VerifyError::TransientNetworkError(format!("{}: {e}", self.url)))?
            .into_body()
            .read_to_string()
            .map_err(|e| VerifyError::TransientNetworkError(format!("{}: {e}", self.url)))
    }
}

impl Verifier for TurnstileVerifier {
    fn verify(&self, request: &VerifyRequest) -> Result<Verdict, VerifyError> {
        let _span = debug_span!("verify", has_ip = request.remote_ip.is_some()).entered();

        if request.token.trim().is_empty() {
            return Err(VerifyError::InvalidRequest("missing token".to_string()));
        }
        let Some(secret) = self.secret.as_deref() else {
            return Err(VerifyError::ServerMisconfigured(format!(
                "{SECRET_ENV} is not set"
            )));
        };

        let body = self.post(secret, request)?;
        let result = interpret_response(&body, self.expected_action.as_deref());
        match &result {
            Ok(verdict) => debug!(hostname = ?verdict.hostname, "verified"),
            Err(e) => debug!(error = %e, "verification failed"),
        }
        result
    }
}

/// Turn a siteverify response body into a verdict.
///
/// A body that is not a siteverify JSON object counts as a transient upstream
/// failure. `success = false` is a rejection carrying the upstream error
/// codes; a verdict for a different action than `expected_action` is
/// rejected with `action-mismatch`.
pub fn interpret_response(
    body: &str,
    expected_action: Option<&str>,
) -> Result<Verdict, VerifyError> {
    let verdict: Verdict = serde_json::from_str(body)
        .map_err(|e| VerifyError::TransientNetworkError(format!("siteverify response: {e}")))?;

    if !verdict.success {
        return Err(VerifyError::Rejected(verdict.error_codes));
    }
    if let Some(expected) = expected_action {
        if verdict.action.as_deref() != Some(expected) {
            return Err(VerifyError::Rejected(vec!["action-mismatch".to_string()]));
        }
    }
    Ok(verdict)
}

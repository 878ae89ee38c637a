use serde::Serialize;

use rune_engine::gate::{TurnstileVerifier, Verdict, Verifier, VerifyError, VerifyRequest};

/// What a verification endpoint would answer.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Outcome {
    pub ok: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub retryable: bool,
}

impl Outcome {
    pub fn from_result(result: Result<Verdict, VerifyError>) -> Self {
        match result {
            Ok(verdict) => Outcome {
                ok: true,
                status: 200,
                verdict: Some(verdict),
                reason: None,
                retryable: false,
            },
            Err(e) => Outcome {
                ok: false,
                status: e.status_code(),
                verdict: None,
                reason: Some(e.to_string()),
                retryable: e.is_retryable(),
            },
        }
    }
}

pub fn run_verify<V: Verifier>(verifier: &V, token: &str, remote_ip: Option<&str>) -> Outcome {
    let mut request = VerifyRequest::new(token);
    if let Some(ip) = remote_ip {
        request = request.with_remote_ip(ip);
    }
    Outcome::from_result(verifier.verify(&request))
}

/// Verify once against the configured siteverify endpoint. Returns whether
/// the token passed.
pub fn verify_cmd(token: &str, remote_ip: Option<&str>) -> bool {
    let verifier = TurnstileVerifier::from_env();
    let outcome = run_verify(&verifier, token, remote_ip);
    let out = die!(serde_json::to_string_pretty(&outcome), "JSON error: {}");
    println!("{out}");
    outcome.ok
}

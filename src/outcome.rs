use crate::headers::Headers;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of authorizing a hypothetical preflight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreflightStatus {
    pub needed: bool,
    pub allowed: bool,
    /// Lowercased request method the policy would refuse, if any.
    pub rejected_method: Option<String>,
    /// Non-simple request headers the policy would refuse, in request order.
    pub rejected_headers: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActualStatus {
    pub allowed: bool,
}

/// Why a conforming browser would block the request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DenialReason {
    NotCorsRequest,
    OriginNotAllowed { origin: String },
    PreflightWouldFail,
    CredentialsNotAllowed,
    /// `*` paired with `Access-Control-Allow-Credentials: true`, which the
    /// Fetch standard forbids outright.
    WildcardWithCredentials,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::NotCorsRequest => write!(
                f,
                "not a CORS request: no Origin header is sent, so CORS does not apply"
            ),
            DenialReason::OriginNotAllowed { origin } => write!(
                f,
                "origin not allowed: {origin} is not listed in the server's allowed origins"
            ),
            DenialReason::PreflightWouldFail => write!(
                f,
                "preflight would fail: the OPTIONS request is not authorized for this method or these headers"
            ),
            DenialReason::CredentialsNotAllowed => write!(
                f,
                "credentials not allowed: the request sends credentials but Access-Control-Allow-Credentials is not true"
            ),
            DenialReason::WildcardWithCredentials => write!(
                f,
                "invalid configuration: a wildcard (*) allowed origin cannot be combined with allowed credentials"
            ),
        }
    }
}

/// Everything a browser and server would decide about one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    pub is_cors_request: bool,
    pub needs_preflight: bool,
    pub preflight: PreflightStatus,
    pub actual: ActualStatus,
    pub is_origin_allowed: bool,
    pub response_headers: Headers,
    pub reasons: Vec<DenialReason>,
}

impl Outcome {
    /// Denial reasons rendered as display strings, in order.
    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

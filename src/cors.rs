use crate::header_builder::HeaderBuilder;
use crate::normalize::{normalize_header_list, split_allow_origins};
use crate::origin::{has_wildcard, is_origin_allowed};
use crate::outcome::{ActualStatus, DenialReason, Outcome};
use crate::policy::ServerPolicy;
use crate::preflight::authorize_preflight;
use crate::request::RequestDescriptor;
use crate::simple::{compute_needs_preflight, effective_method};

/// Stateless CORS evaluator. Holds no configuration; see
/// [`compute_cors_outcome`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CorsEvaluator;

impl CorsEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, request: &RequestDescriptor, server: &ServerPolicy) -> Outcome {
        compute_cors_outcome(request, server)
    }
}

/// Decides what a conforming browser and a server running `server` would do
/// with `request`.
///
/// Every check runs regardless of earlier failures so `reasons` lists all of
/// them.
pub fn compute_cors_outcome(request: &RequestDescriptor, server: &ServerPolicy) -> Outcome {
    let origin = request.normalized_origin();
    let method = effective_method(&request.method);
    let request_headers = normalize_header_list(&request.request_headers);
    let allow_origins = split_allow_origins(&server.allow_origins);
    let allow_methods = normalize_header_list(&server.allow_methods);
    let allow_headers = normalize_header_list(&server.allow_headers);

    let origin_allowed = is_origin_allowed(origin, &allow_origins);
    let needs_preflight =
        compute_needs_preflight(&method, &request_headers, &request.content_type);
    let preflight = authorize_preflight(
        needs_preflight,
        origin_allowed,
        &method,
        &request_headers,
        &allow_methods,
        &allow_headers,
    );

    let wildcard_configured = has_wildcard(&allow_origins);
    let wildcard_with_credentials =
        request.with_credentials && wildcard_configured && server.allow_credentials;
    let credentials_refused = request.with_credentials && !server.allow_credentials;

    let actual_allowed =
        origin_allowed && preflight.allowed && !credentials_refused && !wildcard_with_credentials;

    let response_headers = HeaderBuilder::new(server).build(request, wildcard_configured);

    let mut reasons = Vec::new();
    if origin.is_empty() {
        reasons.push(DenialReason::NotCorsRequest);
    }
    if !origin.is_empty() && !origin_allowed {
        reasons.push(DenialReason::OriginNotAllowed {
            origin: origin.to_owned(),
        });
    }
    if preflight.needed && !preflight.allowed {
        reasons.push(DenialReason::PreflightWouldFail);
    }
    if credentials_refused {
        reasons.push(DenialReason::CredentialsNotAllowed);
    }
    if wildcard_with_credentials {
        reasons.push(DenialReason::WildcardWithCredentials);
    }

    tracing::debug!(
        origin,
        method = %method,
        origin_allowed,
        needs_preflight,
        preflight_allowed = preflight.allowed,
        actual_allowed,
        reasons = reasons.len(),
        "evaluated CORS request"
    );
    for reason in &reasons {
        tracing::trace!(%reason, "CORS denial");
    }

    Outcome {
        is_cors_request: !origin.is_empty(),
        needs_preflight,
        preflight,
        actual: ActualStatus {
            allowed: actual_allowed,
        },
        is_origin_allowed: origin_allowed,
        response_headers,
        reasons,
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;

//! Authorization of the hypothetical `OPTIONS` exchange.

use crate::outcome::PreflightStatus;
use crate::simple::{effective_method, is_simple_header_name};
use crate::util::normalize_lower;

/// Evaluates a preflight and reports exactly what the policy would reject.
///
/// `request_headers`, `allow_methods` and `allow_headers` are expected to be
/// normalized lists. The method and header checks both run when the origin is
/// allowed so every rejected entry is reported.
pub fn authorize_preflight<R, M, H>(
    needs_preflight: bool,
    origin_allowed: bool,
    method: &str,
    request_headers: &[R],
    allow_methods: &[M],
    allow_headers: &[H],
) -> PreflightStatus
where
    R: AsRef<str>,
    M: AsRef<str>,
    H: AsRef<str>,
{
    if !needs_preflight {
        return PreflightStatus {
            needed: false,
            allowed: true,
            ..PreflightStatus::default()
        };
    }

    if !origin_allowed {
        return PreflightStatus {
            needed: true,
            allowed: false,
            ..PreflightStatus::default()
        };
    }

    let method = normalize_lower(&effective_method(method));
    let rejected_method = if allow_methods
        .iter()
        .any(|allowed| allowed.as_ref() == method)
    {
        None
    } else {
        Some(method)
    };

    let rejected_headers: Vec<String> = request_headers
        .iter()
        .map(|header| header.as_ref())
        .filter(|header: &&str| {
            !is_simple_header_name(header)
                && !allow_headers
                    .iter()
                    .any(|allowed| allowed.as_ref() == *header)
        })
        .map(str::to_owned)
        .collect();

    PreflightStatus {
        needed: true,
        allowed: rejected_method.is_none() && rejected_headers.is_empty(),
        rejected_method,
        rejected_headers,
    }
}

/// Returns whether a preflight would be authorized. A request that needs no
/// preflight is trivially authorized; a disallowed origin never is.
pub fn compute_preflight_allowed<R, M, H>(
    needs_preflight: bool,
    origin_allowed: bool,
    method: &str,
    request_headers: &[R],
    allow_methods: &[M],
    allow_headers: &[H],
) -> bool
where
    R: AsRef<str>,
    M: AsRef<str>,
    H: AsRef<str>,
{
    authorize_preflight(
        needs_preflight,
        origin_allowed,
        method,
        request_headers,
        allow_methods,
        allow_headers,
    )
    .allowed
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;

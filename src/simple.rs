//! Classification of requests into "simple" and "needs a preflight".

use crate::constants::{SIMPLE_CONTENT_TYPES, SIMPLE_HEADERS, SIMPLE_METHODS, method};
use crate::util::{normalize_lower, normalize_upper};

/// Returns `true` when `name` is one of the request headers a browser sends
/// cross-origin without asking first.
pub fn is_simple_header_name(name: &str) -> bool {
    let name = normalize_lower(name.trim());
    SIMPLE_HEADERS.contains(&name.as_str())
}

/// Returns `true` when `value` keeps a `POST` simple. Absent (empty) counts
/// as simple. The comparison is on the whole value, so parameters such as
/// `; charset=utf-8` make the type non-simple.
pub fn is_simple_content_type(value: &str) -> bool {
    let value = normalize_lower(value.trim());
    SIMPLE_CONTENT_TYPES.contains(&value.as_str())
}

pub fn is_simple_method(method: &str) -> bool {
    let method = normalize_upper(method.trim());
    SIMPLE_METHODS.contains(&method.as_str())
}

/// Uppercases a request method, substituting `GET` when none is given.
pub fn effective_method(method: &str) -> String {
    let method = method.trim();
    if method.is_empty() {
        method::GET.to_owned()
    } else {
        normalize_upper(method)
    }
}

/// Decides whether a browser would send a preflight before the request.
///
/// `request_headers` is expected to be normalized already (see
/// [`crate::normalize_header_list`]).
pub fn compute_needs_preflight<S: AsRef<str>>(
    method: &str,
    request_headers: &[S],
    content_type: &str,
) -> bool {
    let method = effective_method(method);
    if !is_simple_method(&method) {
        return true;
    }

    if request_headers
        .iter()
        .any(|header| !is_simple_header_name(header.as_ref()))
    {
        return true;
    }

    method == method::POST && !is_simple_content_type(content_type)
}

#[cfg(test)]
#[path = "simple_test.rs"]
mod simple_test;

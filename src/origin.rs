use crate::constants::WILDCARD;

/// Returns `true` when `allow_origins` contains the wildcard entry.
pub fn has_wildcard<S: AsRef<str>>(allow_origins: &[S]) -> bool {
    allow_origins
        .iter()
        .any(|entry| entry.as_ref() == WILDCARD)
}

/// Checks a request origin against the configured allow-list.
///
/// An empty origin is never allowed. Otherwise the wildcard admits anything,
/// and explicit entries must match exactly (origins are case-sensitive).
pub fn is_origin_allowed<S: AsRef<str>>(origin: &str, allow_origins: &[S]) -> bool {
    if origin.is_empty() {
        return false;
    }

    allow_origins.iter().any(|entry| {
        let entry = entry.as_ref();
        entry == WILDCARD || entry == origin
    })
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

//! Canonicalization of the comma-separated strings a request form supplies.

use crate::util::{normalize_lower, split_csv};

/// Splits a comma-separated list of header names (or methods) into trimmed,
/// lowercase entries. Blank entries are dropped; empty input yields an empty
/// vector.
pub fn normalize_header_list(csv: &str) -> Vec<String> {
    split_csv(csv).map(normalize_lower).collect()
}

/// Splits a comma-separated `Access-Control-Allow-Origin` configuration into
/// trimmed entries. Case is preserved because origins compare byte-for-byte.
pub fn split_allow_origins(csv: &str) -> Vec<String> {
    split_csv(csv).map(str::to_owned).collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A hypothetical request a page script is about to make.
///
/// Empty strings stand for absent values: an empty `origin` means the request
/// is not cross-origin, an empty `method` means `GET`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RequestDescriptor {
    pub origin: String,
    pub method: String,
    pub with_credentials: bool,
    /// Comma-separated header names the script sets.
    pub request_headers: String,
    pub content_type: String,
}

impl RequestDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.with_credentials = enabled;
        self
    }

    pub fn with_request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = headers.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// The origin with surrounding whitespace removed; empty when absent.
    pub fn normalized_origin(&self) -> &str {
        self.origin.trim()
    }
}

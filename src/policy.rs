use crate::constants::WILDCARD;
use crate::normalize::split_allow_origins;
use crate::origin::has_wildcard;
use crate::util::{is_http_token, split_csv};
use thiserror::Error;
use url::Url;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serialized origin browsers send for opaque contexts (sandboxed frames,
/// `file:` pages).
const NULL_ORIGIN: &str = "null";

/// A server's CORS configuration, expressed the way it is typed into a form.
///
/// The default policy allows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServerPolicy {
    /// Comma-separated origins, or `*`.
    pub allow_origins: String,
    pub allow_methods: String,
    pub allow_headers: String,
    pub allow_credentials: bool,
}

/// Configuration problems [`ServerPolicy::validate`] reports. Evaluation never
/// fails on them; they exist so a form can warn before submitting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allow_credentials cannot be combined with a wildcard (*) origin; list explicit origins instead"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("the wildcard (*) origin cannot be listed together with explicit origins")]
    WildcardMixedWithOrigins,
    #[error("`{0}` is not a serialized http(s) origin such as https://example.com")]
    InvalidOrigin(String),
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
}

impl ServerPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_origins(mut self, origins: impl Into<String>) -> Self {
        self.allow_origins = origins.into();
        self
    }

    pub fn with_allow_methods(mut self, methods: impl Into<String>) -> Self {
        self.allow_methods = methods.into();
        self
    }

    pub fn with_allow_headers(mut self, headers: impl Into<String>) -> Self {
        self.allow_headers = headers.into();
        self
    }

    pub fn with_allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    /// Lints the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let origins = split_allow_origins(&self.allow_origins);
        let wildcard = has_wildcard(&origins);

        if wildcard && self.allow_credentials {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if wildcard && origins.len() > 1 {
            return Err(ValidationError::WildcardMixedWithOrigins);
        }

        if let Some(origin) = origins
            .iter()
            .find(|origin| origin.as_str() != WILDCARD && !is_serialized_origin(origin))
        {
            return Err(ValidationError::InvalidOrigin(origin.clone()));
        }

        if let Some(method) = split_csv(&self.allow_methods).find(|method| !is_http_token(method)) {
            return Err(ValidationError::InvalidMethod(method.to_owned()));
        }

        if let Some(name) = split_csv(&self.allow_headers).find(|name| !is_http_token(name)) {
            return Err(ValidationError::InvalidHeaderName(name.to_owned()));
        }

        Ok(())
    }
}

/// Returns `true` when `value` is exactly what a browser would put in an
/// `Origin` header for an http(s) page.
fn is_serialized_origin(value: &str) -> bool {
    if value == NULL_ORIGIN {
        return true;
    }

    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.origin().ascii_serialization() == value
        }
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

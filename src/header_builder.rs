use crate::constants::{WILDCARD, header};
use crate::headers::Headers;
use crate::policy::ServerPolicy;
use crate::request::RequestDescriptor;
use indexmap::IndexMap;

/// Builds the response headers a server running `policy` would send.
pub(crate) struct HeaderBuilder<'a> {
    policy: &'a ServerPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a ServerPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build(&self, request: &RequestDescriptor, wildcard_configured: bool) -> Headers {
        let mut headers = IndexMap::with_capacity(5);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            self.allow_origin_value(request, wildcard_configured).to_string(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
            self.allow_credentials_value().to_string(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS.to_string(),
            self.policy.allow_methods.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
            self.policy.allow_headers.clone(),
        );
        headers.insert(header::VARY.to_string(), header::ORIGIN.to_string());
        headers
    }

    /// A credentialed response can never carry `*`, so the request origin is
    /// echoed instead.
    pub(crate) fn allow_origin_value<'r>(
        &self,
        request: &'r RequestDescriptor,
        wildcard_configured: bool,
    ) -> &'r str {
        if wildcard_configured && !request.with_credentials {
            WILDCARD
        } else {
            request.normalized_origin()
        }
    }

    pub(crate) fn allow_credentials_value(&self) -> &'static str {
        if self.policy.allow_credentials {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;

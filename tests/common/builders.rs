#![allow(dead_code)]

use cors_sandbox::constants::method;
use cors_sandbox::{Outcome, RequestDescriptor, ServerPolicy, compute_cors_outcome};

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<String>,
    methods: Option<String>,
    headers: Option<String>,
    credentials: Option<bool>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: impl Into<String>) -> Self {
        self.origins = Some(origins.into());
        self
    }

    pub fn methods(mut self, methods: impl Into<String>) -> Self {
        self.methods = Some(methods.into());
        self
    }

    pub fn headers(mut self, headers: impl Into<String>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    /// Unset fields fall back to a permissive single-origin policy.
    pub fn build(self) -> ServerPolicy {
        ServerPolicy {
            allow_origins: self
                .origins
                .unwrap_or_else(|| "https://app.example".to_string()),
            allow_methods: self
                .methods
                .unwrap_or_else(|| "GET,HEAD,POST,PUT,PATCH,DELETE".to_string()),
            allow_headers: self.headers.unwrap_or_default(),
            allow_credentials: self.credentials.unwrap_or(false),
        }
    }
}

pub struct RequestBuilder {
    descriptor: RequestDescriptor,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            descriptor: RequestDescriptor::new().with_method(method),
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.descriptor.origin = origin.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.descriptor.method = method.into();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.descriptor.with_credentials = enabled;
        self
    }

    pub fn headers(mut self, headers: impl Into<String>) -> Self {
        self.descriptor.request_headers = headers.into();
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.descriptor.content_type = content_type.into();
        self
    }

    pub fn build(self) -> RequestDescriptor {
        self.descriptor
    }

    pub fn evaluate(self, policy: &ServerPolicy) -> Outcome {
        compute_cors_outcome(&self.descriptor, policy)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// A request that needs no preflight unless further configured.
pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

/// A request whose method alone forces a preflight.
pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::PUT)
}

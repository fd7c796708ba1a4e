pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "access-control-allow-origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "access-control-allow-methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "access-control-allow-headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const CONTENT_LANGUAGE: &str = "content-language";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod content_type {
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const JSON: &str = "application/json";
}

/// Value of `Access-Control-Allow-Origin` that admits every origin.
pub const WILDCARD: &str = "*";

/// Request headers a browser may send cross-origin without a preflight.
pub const SIMPLE_HEADERS: [&str; 4] = [
    header::ACCEPT,
    header::ACCEPT_LANGUAGE,
    header::CONTENT_LANGUAGE,
    header::CONTENT_TYPE,
];

/// Methods a browser may send cross-origin without a preflight.
pub const SIMPLE_METHODS: [&str; 3] = [method::GET, method::HEAD, method::POST];

/// `Content-Type` values that keep a `POST` simple. The empty string stands
/// for a request without a body type.
pub const SIMPLE_CONTENT_TYPES: [&str; 4] = [
    content_type::FORM_URLENCODED,
    content_type::MULTIPART_FORM_DATA,
    content_type::TEXT_PLAIN,
    "",
];

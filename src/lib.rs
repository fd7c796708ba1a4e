//! Deterministic evaluation of the CORS protocol as a conforming browser and
//! server would apply it to a single hypothetical request.

pub mod constants;
mod cors;
mod header_builder;
mod headers;
mod normalize;
mod origin;
mod outcome;
mod policy;
mod preflight;
mod request;
mod simple;
mod util;

pub use cors::{CorsEvaluator, compute_cors_outcome};
pub use headers::Headers;
pub use normalize::{normalize_header_list, split_allow_origins};
pub use origin::{has_wildcard, is_origin_allowed};
pub use outcome::{ActualStatus, DenialReason, Outcome, PreflightStatus};
pub use policy::{ServerPolicy, ValidationError};
pub use preflight::{authorize_preflight, compute_preflight_allowed};
pub use request::RequestDescriptor;
pub use simple::{
    compute_needs_preflight, effective_method, is_simple_content_type, is_simple_header_name,
    is_simple_method,
};

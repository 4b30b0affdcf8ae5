//! Simulated request construction.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per simulated request
//! - Build the GET request for a route URI
//! - Attach the generation flags for the application to read
//!
//! # Design Decisions
//! - Request ID added as early as possible for log correlation
//! - Flags travel as a typed request extension in-process, headers over loopback

use std::fmt;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use uuid::Uuid;

use crate::http::simulator::GenerationConfig;

pub const X_REQUEST_ID: &str = "x-request-id";
pub const X_GENERATING: &str = "x-static-routes-generating";
pub const X_PRODUCTION: &str = "x-static-routes-production";
pub const X_DEBUG: &str = "x-static-routes-debug";

/// Correlation ID for one simulated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn header_value(&self) -> HeaderValue {
        // UUID text is always a valid header value.
        HeaderValue::from_str(&self.0).unwrap_or_else(|_| HeaderValue::from_static("unknown"))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Header pairs describing the generation flags, for transports without extensions.
pub fn generation_headers(config: &GenerationConfig) -> [(&'static str, HeaderValue); 3] {
    let flag = |on: bool| HeaderValue::from_static(if on { "1" } else { "0" });
    [
        (X_GENERATING, flag(config.generating)),
        (X_PRODUCTION, flag(config.force_production_mode)),
        (X_DEBUG, flag(!config.disable_debug)),
    ]
}

/// Build the in-process GET request for `uri`.
pub fn build_request(
    uri: &str,
    request_id: &RequestId,
    config: &GenerationConfig,
) -> Result<Request<Body>, axum::http::Error> {
    let mut builder = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(X_REQUEST_ID, request_id.header_value())
        .extension(*config);

    for (name, value) in generation_headers(config) {
        builder = builder.header(name, value);
    }

    builder.body(Body::empty())
}

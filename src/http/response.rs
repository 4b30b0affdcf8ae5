//! Simulated response model.
//!
//! # Responsibilities
//! - Collect a rendered response (status, headers, full body)
//! - Carry the error raised while handling the request, if any
//! - Classify: error / redirection / everything else
//!
//! # Design Decisions
//! - Bodies are buffered fully, bounded by `max_body_size`
//! - A raised error travels as a `RaisedError` response extension
//! - Non-redirect statuses without a raised error (404, 500) count as content

use std::fmt;

use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

/// An unhandled error raised while the application handled a request.
///
/// Return it (or insert it as a response extension) from a handler to make
/// the generation run abort on that route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    /// Identifying type of the error (e.g. "panic", "transport", "DbError").
    pub kind: String,
    pub message: String,
}

impl RaisedError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.message)
    }
}

impl IntoResponse for RaisedError {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// The result of simulating a request against a route.
#[derive(Debug, Clone)]
pub struct SimulatedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub raised_error: Option<RaisedError>,
}

impl SimulatedResponse {
    /// A response that carries only a raised error.
    pub fn failed(error: RaisedError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            raised_error: Some(error),
        }
    }

    /// Buffer an axum response, lifting any `RaisedError` extension.
    pub async fn collect(response: Response, max_body_size: usize) -> Self {
        let (mut parts, body) = response.into_parts();
        let mut raised_error = parts.extensions.remove::<RaisedError>();

        let body = match axum::body::to_bytes(body, max_body_size).await {
            Ok(bytes) => bytes,
            Err(e) => {
                raised_error.get_or_insert_with(|| RaisedError::new("body", e.to_string()));
                Bytes::new()
            }
        };

        Self {
            status: parts.status,
            headers: parts.headers,
            body,
            raised_error,
        }
    }

    pub fn is_redirection(&self) -> bool {
        self.status.is_redirection()
    }

    /// The `Location` header, meaningful only on redirections.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

//! In-process request simulation.
//!
//! # Responsibilities
//! - Dispatch a request straight into an axum `Router` (no socket)
//! - Turn handler panics into a raised error instead of unwinding the run
//! - Buffer the rendered body
//!
//! # Design Decisions
//! - `tower::ServiceExt::oneshot` on a clone of the router per request
//! - `CatchPanicLayer` is the innermost layer so its 500 keeps the extension
//! - The router's error type is `Infallible`; every failure ends up in the response

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tower::ServiceExt;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::http::request::{build_request, RequestId};
use crate::http::response::{RaisedError, SimulatedResponse};
use crate::http::simulator::{GenerationConfig, RequestSimulator};

/// Simulates requests by calling the application's router directly.
#[derive(Debug, Clone)]
pub struct InProcessSimulator {
    router: Router,
    max_body_size: usize,
}

impl InProcessSimulator {
    /// Wrap an application router.
    pub fn new(router: Router, max_body_size: usize) -> Self {
        let router = router
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http());
        Self {
            router,
            max_body_size,
        }
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    RaisedError::new("panic", message).into_response()
}

impl RequestSimulator for InProcessSimulator {
    async fn simulate(&self, uri: &str, config: &GenerationConfig) -> SimulatedResponse {
        let request_id = RequestId::new();
        let request = match build_request(uri, &request_id, config) {
            Ok(req) => req,
            Err(e) => return SimulatedResponse::failed(RaisedError::new("request", e.to_string())),
        };

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let simulated = SimulatedResponse::collect(response, self.max_body_size).await;

        tracing::debug!(
            request_id = %request_id,
            uri = %uri,
            status = %simulated.status,
            bytes = simulated.body.len(),
            "Simulated request"
        );

        simulated
    }
}

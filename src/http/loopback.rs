//! Loopback request simulation.
//!
//! # Responsibilities
//! - Fetch routes from a locally running instance over HTTP
//! - Send the generation flags as headers
//! - Report transport failures as raised errors
//!
//! # Design Decisions
//! - Redirects are never followed (`redirect::Policy::none()`)
//! - No retries: a failed fetch aborts the run, re-running is the retry
//! - Optional per-request timeout; 0 disables it

use std::time::Duration;

use axum::body::Bytes;
use reqwest::redirect;
use url::Url;

use crate::http::request::{generation_headers, RequestId, X_REQUEST_ID};
use crate::http::response::{RaisedError, SimulatedResponse};
use crate::http::simulator::{GenerationConfig, RequestSimulator};

/// Simulates requests against a loopback HTTP server.
#[derive(Debug, Clone)]
pub struct LoopbackSimulator {
    client: reqwest::Client,
    base_url: Url,
    max_body_size: usize,
}

impl LoopbackSimulator {
    /// Create a simulator for `base_url`.
    pub fn new(
        base_url: Url,
        request_timeout: Option<Duration>,
        max_body_size: usize,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .no_proxy()
            .user_agent(concat!("static-routes/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            max_body_size,
        })
    }

    /// Resolve a route URI against the base URL, keeping any base path.
    pub fn url_for(&self, uri: &str) -> Result<Url, url::ParseError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(uri.trim_start_matches('/'))
    }

    async fn fetch(
        &self,
        uri: &str,
        request_id: &RequestId,
        config: &GenerationConfig,
    ) -> Result<SimulatedResponse, RaisedError> {
        let url = self
            .url_for(uri)
            .map_err(|e| RaisedError::new("request", e.to_string()))?;

        let mut request = self
            .client
            .get(url)
            .header(X_REQUEST_ID, request_id.header_value());
        for (name, value) in generation_headers(config) {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body: Bytes = response.bytes().await.map_err(transport_error)?;

        if body.len() > self.max_body_size {
            return Err(RaisedError::new(
                "body",
                format!("length limit exceeded ({} > {})", body.len(), self.max_body_size),
            ));
        }

        Ok(SimulatedResponse {
            status,
            headers,
            body,
            raised_error: None,
        })
    }
}

fn transport_error(e: reqwest::Error) -> RaisedError {
    RaisedError::new("transport", e.to_string())
}

impl RequestSimulator for LoopbackSimulator {
    async fn simulate(&self, uri: &str, config: &GenerationConfig) -> SimulatedResponse {
        let request_id = RequestId::new();
        match self.fetch(uri, &request_id, config).await {
            Ok(response) => {
                tracing::debug!(
                    request_id = %request_id,
                    uri = %uri,
                    status = %response.status,
                    bytes = response.body.len(),
                    "Fetched over loopback"
                );
                response
            }
            Err(error) => {
                tracing::debug!(request_id = %request_id, uri = %uri, error = %error, "Loopback fetch failed");
                SimulatedResponse::failed(error)
            }
        }
    }
}

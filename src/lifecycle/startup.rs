//! Startup orchestration for loopback runs.
//!
//! # Responsibilities
//! - Turn a validated config into a route source and a simulator
//! - Wire cancellation into the generator
//! - Run it and hand back the report
//!
//! # Design Decisions
//! - Fail fast: a missing route source or a bad client setup is fatal
//! - The in-process path needs no startup: build `Generator` from a `RouteTable`

use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;
use url::Url;

use crate::config::GeneratorConfig;
use crate::generator::{GenerateError, GenerationReport, Generator};
use crate::http::LoopbackSimulator;
use crate::routing::StaticRouteList;

/// Errors raised before or while running a loopback generation.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("No route source configured: set source.base_url and source.routes")]
    NoRouteSource,

    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Generate every configured route by fetching it from `source.base_url`.
pub async fn run_loopback(
    config: &GeneratorConfig,
    shutdown: Option<broadcast::Receiver<()>>,
) -> Result<GenerationReport, StartupError> {
    let base_url = config
        .source
        .base_url
        .as_deref()
        .ok_or(StartupError::NoRouteSource)?;
    let base_url = Url::parse(base_url)?;

    let routes = StaticRouteList::new(&config.source.routes);
    if routes.is_empty() {
        tracing::warn!("source.routes is empty, output directory will only be cleared");
    }

    let timeout = match config.timeouts.request_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    tracing::info!(
        base_url = %base_url,
        routes = routes.len(),
        output_path = %config.output_path,
        "Starting loopback generation"
    );

    let simulator = LoopbackSimulator::new(base_url, timeout, config.max_body_size)?;
    let mut generator = Generator::new(routes, simulator, config);
    if let Some(rx) = shutdown {
        generator = generator.with_shutdown(rx);
    }

    Ok(generator.run().await?)
}

//! The generation pipeline.
//!
//! # Responsibilities
//! - Clear the output tree once, before any route is processed
//! - Walk GET routes in table order and classify each response
//! - Write successful bodies to `{output_path}/{uri}/index.html`
//! - Abort on the first raised error or filesystem failure
//! - Stop between routes when a shutdown signal arrives

use std::path::{Path, PathBuf};

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::config::GeneratorConfig;
use crate::generator::error::GenerateError;
use crate::generator::report::{GenerationReport, RouteOutcome};
use crate::http::{GenerationConfig, RequestSimulator};
use crate::output;
use crate::routing::{ExclusionSet, Route, RouteProvider};

/// Freezes an application's GET routes into a static tree.
pub struct Generator<P, S> {
    provider: P,
    simulator: S,
    output_path: PathBuf,
    exclusions: ExclusionSet,
    generation: GenerationConfig,
    shutdown: Option<broadcast::Receiver<()>>,
}

impl<P, S> Generator<P, S>
where
    P: RouteProvider,
    S: RequestSimulator,
{
    /// Create a generator. `config` is read once, here.
    pub fn new(provider: P, simulator: S, config: &GeneratorConfig) -> Self {
        Self {
            provider,
            simulator,
            output_path: PathBuf::from(&config.output_path),
            exclusions: ExclusionSet::new(&config.excluded_paths),
            generation: GenerationConfig::from_flags(&config.generation),
            shutdown: None,
        }
    }

    /// Stop scheduling routes once a signal is received on `shutdown`.
    pub fn with_shutdown(mut self, shutdown: broadcast::Receiver<()>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run a full generation.
    pub async fn run(&mut self) -> Result<GenerationReport, GenerateError> {
        output::clear(&self.output_path).map_err(GenerateError::filesystem(&self.output_path))?;

        tracing::info!(
            output_path = %self.output_path.display(),
            exclusions = self.exclusions.prefixes().len(),
            "Output directory cleared"
        );

        let routes = self.provider.get_routes();
        let mut report = GenerationReport::default();

        for route in &routes {
            if self.shutdown_requested() {
                tracing::warn!(completed = report.total(), "Generation cancelled");
                return Err(GenerateError::Cancelled {
                    completed: report.total(),
                });
            }

            let outcome = self.generate_route(route).await?;
            report.record(&route.uri, outcome);
        }

        tracing::info!(
            written = report.written.len(),
            excluded = report.excluded.len(),
            redirected = report.redirected.len(),
            dynamic = report.dynamic.len(),
            "Static routes generation successfully completed"
        );

        Ok(report)
    }

    async fn generate_route(&self, route: &Route) -> Result<RouteOutcome, GenerateError> {
        let uri = route.uri.as_str();

        if self.exclusions.matches(uri) {
            tracing::info!(uri = %uri, "excluded via config");
            return Ok(RouteOutcome::Excluded);
        }

        if !route.is_static() {
            tracing::info!(uri = %uri, "skipped: dynamic segment");
            return Ok(RouteOutcome::Dynamic);
        }

        let file = output::output_file_for(&self.output_path, uri).ok_or_else(|| {
            GenerateError::UnsafeUri {
                uri: uri.to_string(),
            }
        })?;

        let response = self.simulator.simulate(uri, &self.generation).await;

        if let Some(error) = response.raised_error {
            tracing::error!(uri = %uri, kind = %error.kind, message = %error.message, "Route raised an error");
            return Err(GenerateError::Handler {
                uri: uri.to_string(),
                kind: error.kind,
                message: error.message,
            });
        }

        if response.is_redirection() {
            let location = response.location().map(str::to_string);
            tracing::info!(
                uri = %uri,
                status = %response.status,
                location = location.as_deref().unwrap_or(""),
                "excluded due to redirection"
            );
            return Ok(RouteOutcome::Redirected { location });
        }

        if let Some(parent) = file.parent() {
            output::ensure_dir(parent).map_err(GenerateError::filesystem(parent))?;
        }
        output::write_file(&file, &response.body).map_err(GenerateError::filesystem(&file))?;

        tracing::info!(
            uri = %uri,
            status = %response.status,
            bytes = response.body.len(),
            "generated successfully"
        );

        Ok(RouteOutcome::Written {
            path: file,
            bytes: response.body.len(),
        })
    }

    fn shutdown_requested(&mut self) -> bool {
        match self.shutdown.as_mut().map(|rx| rx.try_recv()) {
            Some(Ok(())) | Some(Err(TryRecvError::Lagged(_))) => true,
            Some(Err(TryRecvError::Empty)) | Some(Err(TryRecvError::Closed)) | None => false,
        }
    }
}

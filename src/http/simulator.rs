//! The request simulation boundary.

use std::future::Future;

use crate::config::GenerationFlags;
use crate::http::response::SimulatedResponse;

/// Flags handed to the application for the duration of a generation run.
///
/// In-process handlers can extract it with `axum::Extension<GenerationConfig>`.
/// Loopback requests carry it as `x-static-routes-*` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    pub force_production_mode: bool,
    pub disable_debug: bool,
    pub generating: bool,
}

impl GenerationConfig {
    /// Build the config for an active run from configured flags.
    pub fn from_flags(flags: &GenerationFlags) -> Self {
        Self {
            force_production_mode: flags.force_production_mode,
            disable_debug: flags.disable_debug,
            generating: true,
        }
    }
}

/// Produces a response for a URI without real network transport to a client.
///
/// Implementations must resolve one request completely before returning.
pub trait RequestSimulator {
    /// Simulate a GET request for `uri`.
    fn simulate(
        &self,
        uri: &str,
        config: &GenerationConfig,
    ) -> impl Future<Output = SimulatedResponse> + Send;
}

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a generation run.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the static route generator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the generated static tree. Cleared at the start of every run.
    pub output_path: String,

    /// Route prefixes that are never generated.
    pub excluded_paths: Vec<String>,

    /// Upper bound on a single rendered response body, in bytes.
    pub max_body_size: usize,

    /// Flags handed to the application while it renders.
    pub generation: GenerationFlags,

    /// Route source for loopback mode (CLI without a linked application).
    pub source: SourceConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: "static".to_string(),
            excluded_paths: Vec::new(),
            max_body_size: 16 * 1024 * 1024, // 16MB
            generation: GenerationFlags::default(),
            source: SourceConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Rendering mode the application is asked to use during generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationFlags {
    /// Render as in production, whatever the application's own setting.
    pub force_production_mode: bool,

    /// Suppress debug output (error pages with traces, toolbars, ...).
    pub disable_debug: bool,
}

impl Default for GenerationFlags {
    fn default() -> Self {
        Self {
            force_production_mode: true,
            disable_debug: true,
        }
    }
}

/// Where routes come from when no application is linked into the process.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of a locally running instance (e.g., "http://127.0.0.1:8000").
    pub base_url: Option<String>,

    /// GET routes to generate, in order.
    pub routes: Vec<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout for loopback requests in seconds. 0 disables it.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

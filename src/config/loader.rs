//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GeneratorConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::route::normalize_uri;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load configuration, falling back to defaults when `path` does not exist.
pub fn load_or_default(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return finalize(GeneratorConfig::default());
    }
    load_config(path)
}

/// Parse, normalise and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    finalize(config)
}

/// Normalise user-supplied paths and run semantic validation.
///
/// Call again after applying command-line overrides.
pub fn finalize(mut config: GeneratorConfig) -> Result<GeneratorConfig, ConfigError> {
    // Validate before normalising: an empty entry would otherwise become "/".
    validate_config(&config).map_err(ConfigError::Validation)?;

    config.excluded_paths = config
        .excluded_paths
        .iter()
        .map(|p| normalize_uri(p))
        .collect();
    config.source.routes = config
        .source
        .routes
        .iter()
        .map(|r| normalize_uri(r))
        .collect();

    Ok(config)
}

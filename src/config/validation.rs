//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Refuse output paths whose removal would be destructive (filesystem roots)
//! - Validate value ranges and URL syntax
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GeneratorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::path::{Component, Path};

use thiserror::Error;
use url::Url;

use crate::config::schema::GeneratorConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("output_path must not be empty")]
    EmptyOutputPath,

    #[error("output_path '{0}' is a filesystem root and cannot be cleared")]
    RootOutputPath(String),

    #[error("excluded_paths[{0}] is empty")]
    EmptyExcludedPath(usize),

    #[error("max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("source.base_url '{url}' is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("source.routes is set but source.base_url is missing")]
    MissingBaseUrl,
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &GeneratorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let output = config.output_path.trim();
    if output.is_empty() {
        errors.push(ValidationError::EmptyOutputPath);
    } else if is_filesystem_root(Path::new(output)) {
        errors.push(ValidationError::RootOutputPath(config.output_path.clone()));
    }

    for (i, excluded) in config.excluded_paths.iter().enumerate() {
        if excluded.trim().is_empty() {
            errors.push(ValidationError::EmptyExcludedPath(i));
        }
    }

    if config.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    match &config.source.base_url {
        Some(raw) => {
            if let Err(reason) = check_base_url(raw) {
                errors.push(ValidationError::InvalidBaseUrl {
                    url: raw.clone(),
                    reason,
                });
            }
        }
        None if !config.source.routes.is_empty() => {
            errors.push(ValidationError::MissingBaseUrl);
        }
        None => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_filesystem_root(path: &Path) -> bool {
    let mut components = path.components().peekable();
    if components.peek().is_none() {
        return false;
    }
    components.all(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

fn check_base_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if url.scheme() != "http" {
        return Err(format!("scheme '{}' is not supported, use http", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}

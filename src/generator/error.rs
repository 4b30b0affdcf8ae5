//! Generation error definitions.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The application raised an unhandled error while rendering a route.
    #[error("Route with URI '{uri}' threw Exception:'{kind}:{message}'")]
    Handler {
        uri: String,
        kind: String,
        message: String,
    },

    /// Clearing, creating or writing part of the output tree failed.
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A route URI would address a file outside the output tree.
    #[error("Route URI '{uri}' does not map inside the output directory")]
    UnsafeUri { uri: String },

    /// The run was stopped by a shutdown signal between routes.
    #[error("Generation cancelled after {completed} routes")]
    Cancelled { completed: usize },
}

impl GenerateError {
    /// Adapter for `map_err` on filesystem operations.
    pub(crate) fn filesystem(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }
}

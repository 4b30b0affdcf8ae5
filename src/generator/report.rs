//! Per-route outcomes and the run summary.

use std::path::PathBuf;

/// Terminal state of one route that did not abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Matched an excluded prefix.
    Excluded,
    /// URI still contains path parameters; nothing concrete to render.
    Dynamic,
    /// The application answered with a 3xx. The target is not followed.
    Redirected { location: Option<String> },
    /// Body written to `path`.
    Written { path: PathBuf, bytes: usize },
}

/// What a completed run did, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<(String, PathBuf)>,
    pub excluded: Vec<String>,
    pub redirected: Vec<String>,
    pub dynamic: Vec<String>,
}

impl GenerationReport {
    pub fn record(&mut self, uri: &str, outcome: RouteOutcome) {
        let uri = uri.to_string();
        match outcome {
            RouteOutcome::Excluded => self.excluded.push(uri),
            RouteOutcome::Dynamic => self.dynamic.push(uri),
            RouteOutcome::Redirected { .. } => self.redirected.push(uri),
            RouteOutcome::Written { path, .. } => self.written.push((uri, path)),
        }
    }

    /// Number of routes that reached a terminal state.
    pub fn total(&self) -> usize {
        self.written.len() + self.excluded.len() + self.redirected.len() + self.dynamic.len()
    }
}

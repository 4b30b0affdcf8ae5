//! Path exclusion matching.
//!
//! # Responsibilities
//! - Decide whether a route URI falls under a configured excluded prefix
//!
//! # Design Decisions
//! - Exact match or prefix followed by '/'; `/admin` never matches `/administrator`
//! - Path matching is case-sensitive
//! - No wildcards or regex
//! - Prefixes are normalised like route URIs, so `admin/` excludes `/admin`

use crate::routing::route::normalize_uri;

/// Returns true if `uri` equals an exclusion entry or lies beneath one.
pub fn is_excluded<S: AsRef<str>>(uri: &str, exclusions: &[S]) -> bool {
    exclusions
        .iter()
        .any(|entry| matches_prefix(uri, entry.as_ref()))
}

fn matches_prefix(uri: &str, prefix: &str) -> bool {
    match uri.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Ordered set of excluded prefixes, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    prefixes: Vec<String>,
}

impl ExclusionSet {
    /// Create a set, normalising each prefix with [`normalize_uri`].
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| normalize_uri(p.as_ref()))
                .collect(),
        }
    }

    /// Returns true if the URI is excluded by any prefix.
    pub fn matches(&self, uri: &str) -> bool {
        is_excluded(uri, &self.prefixes)
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

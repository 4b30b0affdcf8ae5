//! Mapping route URIs to files in the static tree.

use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

/// The file a route's body is written to: `{base}/{uri}/index.html`.
///
/// Empty segments are skipped, so the root route maps to `{base}/index.html`.
/// Returns `None` if a segment is `.` or `..`.
pub fn output_file_for(base: &Path, uri: &str) -> Option<PathBuf> {
    let mut path = base.to_path_buf();
    for segment in uri.split('/').filter(|s| !s.is_empty()) {
        if segment == "." || segment == ".." {
            return None;
        }
        path.push(segment);
    }
    path.push(INDEX_FILE);
    Some(path)
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::Extension;
use static_routes::{GenerationConfig, GeneratorConfig, RaisedError, RouteTable};
use tokio::net::TcpListener;

pub async fn home() -> &'static str {
    "<h1>Home</h1>"
}

pub async fn about() -> &'static str {
    "<p>About</p>"
}

pub async fn secret() -> &'static str {
    "<p>Secret</p>"
}

pub async fn moved() -> Redirect {
    Redirect::temporary("/about")
}

pub async fn gone() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "<p>Gone</p>")
}

pub async fn broken() -> RaisedError {
    RaisedError::new("TemplateError", "layout.html not found")
}

pub async fn mode(Extension(cfg): Extension<GenerationConfig>) -> String {
    format!(
        "generating={} production={} debug={}",
        cfg.generating, cfg.force_production_mode, !cfg.disable_debug
    )
}

/// The reference table: home, about, and an admin page.
pub fn site() -> RouteTable {
    RouteTable::new()
        .get("/", home)
        .get("/about", about)
        .get("/admin/secret", secret)
}

pub fn config_for(out: &Path, excluded: &[&str]) -> GeneratorConfig {
    GeneratorConfig {
        output_path: out.to_string_lossy().into_owned(),
        excluded_paths: excluded.iter().map(|s| s.to_string()).collect(),
        ..GeneratorConfig::default()
    }
}

/// Every file under `root`, keyed by '/'-joined path relative to `root`.
pub fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    if root.exists() {
        collect(root, root, &mut files);
    }
    files
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let rel = path
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            files.insert(rel, fs::read(&path).unwrap());
        }
    }
}

/// Serve `table`'s router on an ephemeral loopback port.
pub async fn serve(table: &RouteTable) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = table.router();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    addr
}

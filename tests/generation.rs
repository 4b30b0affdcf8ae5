//! End-to-end generation against in-process axum routers.

use std::fs;

use static_routes::generator::{GenerateError, Generator};
use static_routes::{Route, RouteTable};

mod common;

#[tokio::test]
async fn test_reference_site_with_admin_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = common::site();
    let config = common::config_for(&out, &["/admin"]);

    let mut generator = Generator::new(table.clone(), table.simulator(config.max_body_size), &config);
    let report = generator.run().await.unwrap();

    assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), "<h1>Home</h1>");
    assert_eq!(fs::read_to_string(out.join("about/index.html")).unwrap(), "<p>About</p>");
    assert!(!out.join("admin").exists());

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.excluded, vec!["/admin/secret"]);
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = common::site().get("/blog/2024/hello", common::about);
    let config = common::config_for(&out, &[]);

    Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();
    let first = common::read_tree(&out);

    Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();
    let second = common::read_tree(&out);

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_stale_output_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir_all(out.join("removed-page")).unwrap();
    fs::write(out.join("removed-page/index.html"), "stale").unwrap();

    let table = RouteTable::new().get("/", common::home);
    let config = common::config_for(&out, &[]);
    Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    let tree = common::read_tree(&out);
    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["index.html"]);
}

#[tokio::test]
async fn test_redirect_is_skipped_without_abort() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new()
        .get("/old", common::moved)
        .get("/about", common::about);
    let config = common::config_for(&out, &[]);

    let report = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(report.redirected, vec!["/old"]);
    assert!(!out.join("old").exists());
    assert!(out.join("about/index.html").exists());
}

#[tokio::test]
async fn test_raised_error_aborts_and_keeps_prior_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new()
        .get("/", common::home)
        .get("/broken", common::broken)
        .get("/about", common::about);
    let config = common::config_for(&out, &[]);

    let err = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap_err();

    match &err {
        GenerateError::Handler { uri, kind, message } => {
            assert_eq!(uri, "/broken");
            assert_eq!(kind, "TemplateError");
            assert_eq!(message, "layout.html not found");
        }
        other => panic!("expected handler error, got {other}"),
    }
    assert!(err.to_string().contains("/broken"));
    assert!(out.join("index.html").exists());
    assert!(!out.join("broken").exists());
    assert!(!out.join("about").exists());
}

#[tokio::test]
async fn test_panicking_handler_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new().get("/crash", || async {
        let items: Vec<&str> = Vec::new();
        items[3].to_string()
    });
    let config = common::config_for(&out, &[]);

    let err = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Handler { ref kind, .. } if kind == "panic"));
}

#[tokio::test]
async fn test_not_found_status_is_written_as_content() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new().get("/gone", common::gone);
    let config = common::config_for(&out, &[]);

    Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(out.join("gone/index.html")).unwrap(), "<p>Gone</p>");
}

#[tokio::test]
async fn test_only_get_routes_are_generated() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new()
        .get("/", common::home)
        .post("/contact", common::about)
        .put("/profile", common::about);
    let config = common::config_for(&out, &[]);

    let report = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(report.total(), 1);
    assert!(!out.join("contact").exists());
    assert!(!out.join("profile").exists());
}

#[tokio::test]
async fn test_exclusion_does_not_match_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new()
        .get("/admin", common::secret)
        .get("/administrator", common::about);
    let config = common::config_for(&out, &["/admin"]);

    let report = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(report.excluded, vec!["/admin"]);
    assert!(out.join("administrator/index.html").exists());
}

#[tokio::test]
async fn test_handlers_see_generation_flags() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new().get("/", common::mode);
    let mut config = common::config_for(&out, &[]);
    config.generation.disable_debug = false;

    Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(out.join("index.html")).unwrap(),
        "generating=true production=true debug=true"
    );
}

#[tokio::test]
async fn test_route_vec_provider_with_dynamic_route() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = RouteTable::new()
        .get("/", common::home)
        .get("/users/{id}", common::about);
    let config = common::config_for(&out, &[]);
    let routes = vec![Route::get("/"), Route::get("/users/{id}")];

    let report = Generator::new(routes, table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(report.dynamic, vec!["/users/{id}"]);
    assert_eq!(common::read_tree(&out).len(), 1);
}

#[tokio::test]
async fn test_unnormalized_exclusion_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let table = common::site();
    let config = common::config_for(&out, &["admin/"]);

    let report = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap();

    assert_eq!(report.excluded, vec!["/admin/secret"]);
    assert!(!out.join("admin").exists());
}

#[tokio::test]
async fn test_output_path_that_is_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::write(&out, "keep me").unwrap();
    let table = common::site();
    let config = common::config_for(&out, &[]);

    let err = Generator::new(table.clone(), table.simulator(config.max_body_size), &config)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Filesystem { ref path, .. } if *path == out));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

//! End-to-end tests of the bundle operations against the embedded
//! scaffolds and the default engine.

use atelier_cli::bundle::{self, BundleOptions, ServeBundleOptions};
use atelier_cli::embedded;
use atelier_cli::error::CliError;
use atelier_cli::templates::TemplateRegistry;
use atelier_engine::StaticEngine;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Materialize the embedded scaffolds into a fresh registry root.
fn registry_in(temp: &TempDir) -> TemplateRegistry {
    let root = temp.path().join("templates");
    embedded::materialize_into(&root).unwrap();
    TemplateRegistry::new(root)
}

#[tokio::test]
async fn default_template_bundles_end_to_end() {
    let temp = TempDir::new().unwrap();
    let registry = registry_in(&temp);

    let input = temp.path().join("Widget.svelte");
    fs::write(&input, "<h1>widget</h1>").unwrap();

    let out = temp.path().join("dist");
    let options = BundleOptions {
        output: Some(out.clone()),
        ..Default::default()
    };

    let report = bundle::html_bundle(&input, &options, &registry, &StaticEngine::new())
        .await
        .unwrap();

    // The svelte scaffold was staged and emitted under dist/html.
    assert!(out.join("html").join("index.html").is_file());
    assert!(out.join("html").join("index.js").is_file());
    assert!(out.join("cache").join("manifest.json").is_file());
    assert!(!report.assets.is_empty());

    // The staged mount module wires the caller's component in.
    let mount = fs::read_to_string(out.join("app").join("index.js")).unwrap();
    assert!(mount.contains("Widget.svelte"));
    assert!(mount.contains("new App"));
}

#[tokio::test]
async fn named_react_template_generates_react_mount() {
    let temp = TempDir::new().unwrap();
    let registry = registry_in(&temp);

    let input = temp.path().join("Widget.jsx");
    fs::write(&input, "export default () => null;").unwrap();

    let out = temp.path().join("dist");
    let options = BundleOptions {
        output: Some(out.clone()),
        template: Some("react".to_string()),
        ..Default::default()
    };

    bundle::html_bundle(&input, &options, &registry, &StaticEngine::new())
        .await
        .unwrap();

    let mount = fs::read_to_string(out.join("app").join("index.js")).unwrap();
    assert!(mount.contains("React.createElement"));
    assert!(!mount.contains("new App"));
}

#[tokio::test]
async fn optimized_bundle_fingerprints_assets() {
    let temp = TempDir::new().unwrap();
    let registry = registry_in(&temp);

    let input = temp.path().join("Widget.svelte");
    fs::write(&input, "<h1>widget</h1>").unwrap();

    let out = temp.path().join("dist");
    let options = BundleOptions {
        output: Some(out.clone()),
        optimized: true,
        ..Default::default()
    };

    let report = bundle::html_bundle(&input, &options, &registry, &StaticEngine::new())
        .await
        .unwrap();

    // Script assets carry a content hash; no source maps in optimized mode.
    assert!(report
        .assets
        .iter()
        .any(|a| a.name.starts_with("index.") && a.name.ends_with(".js") && a.name != "index.js"));
    assert!(!report.assets.iter().any(|a| a.name.ends_with(".map")));
}

#[tokio::test]
async fn unknown_template_defers_failure_to_the_engine() {
    let temp = TempDir::new().unwrap();
    let registry = registry_in(&temp);

    let input = temp.path().join("Widget.jsx");
    fs::write(&input, "export default () => null;").unwrap();

    let options = BundleOptions {
        output: Some(temp.path().join("dist")),
        template: Some("no-such-template-dir-for-this-test".to_string()),
        ..Default::default()
    };

    let err = bundle::html_bundle(&input, &options, &registry, &StaticEngine::new())
        .await
        .unwrap_err();

    match err {
        CliError::Engine(engine_err) => assert!(engine_err.is_entry_not_found()),
        other => panic!("expected engine entry-not-found, got: {other}"),
    }
}

#[tokio::test]
async fn serving_without_tls_credentials_fails_with_tls_error() {
    let temp = TempDir::new().unwrap();
    let registry = registry_in(&temp);

    let input = temp.path().join("Widget.svelte");
    fs::write(&input, "<h1>widget</h1>").unwrap();

    let options = ServeBundleOptions {
        bundle: BundleOptions {
            output: Some(temp.path().join("dist")),
            ..Default::default()
        },
        port: 0,
        host: "127.0.0.1".to_string(),
        ssl: true,
        cert: None,
        key: None,
    };

    let err = bundle::http_bundle(&input, &options, &registry, &StaticEngine::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Engine(e) if matches!(e, atelier_engine::EngineError::Tls(_))));
}

#[tokio::test]
async fn serve_binds_and_shuts_down() {
    let temp = TempDir::new().unwrap();
    let registry = registry_in(&temp);

    let input = temp.path().join("Widget.svelte");
    fs::write(&input, "<h1>widget</h1>").unwrap();

    let options = ServeBundleOptions {
        bundle: BundleOptions {
            output: Some(temp.path().join("dist")),
            ..Default::default()
        },
        port: 0,
        host: "127.0.0.1".to_string(),
        ssl: false,
        cert: None,
        key: None,
    };

    let handle = bundle::http_bundle(&input, &options, &registry, &StaticEngine::new())
        .await
        .unwrap();

    assert!(handle.url().starts_with("http://127.0.0.1:"));
    assert_ne!(handle.addr().port(), 0);
    handle.shutdown().await.unwrap();
}

#[test]
fn embedded_svelte_scaffold_carries_the_marker() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("templates");
    embedded::materialize_into(&root).unwrap();

    assert!(root.join("svelte").join("App.svelte").is_file());
    assert!(!Path::new(&root.join("react").join("App.svelte")).exists());
}

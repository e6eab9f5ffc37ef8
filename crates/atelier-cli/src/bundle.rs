//! The two entry operations: one-shot bundling and serving over HTTP(S).
//!
//! Both re-resolve the template identifier and re-classify the scaffold on
//! every call; only the immutable registry is shared between invocations.
//! Engine failures propagate to the caller without translation.

use crate::error::Result;
use crate::templates::{self, TemplateRegistry};
use atelier_engine::{BuildReport, Engine, EngineOptions, ServeOptions, ServerHandle};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output directory used when the caller specifies none.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Caller-facing build options, passed through unchanged to resolution and
/// the engine. Nothing in the pipeline mutates it.
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Rebuild on source changes (meaningful while serving)
    pub watch: bool,
    /// Output directory; defaults to [`DEFAULT_OUT_DIR`]
    pub output: Option<PathBuf>,
    /// Template identifier: a built-in short name, a path, or absent
    pub template: Option<String>,
    /// Production build: minify, content-hash, no source maps
    pub optimized: bool,
}

/// Options for the serve operation.
#[derive(Debug, Clone)]
pub struct ServeBundleOptions {
    /// Shared build options
    pub bundle: BundleOptions,
    /// Port to listen on (0 for ephemeral)
    pub port: u16,
    /// Host to bind
    pub host: String,
    /// Terminate TLS
    pub ssl: bool,
    /// PEM certificate path, used when `ssl` is set
    pub cert: Option<PathBuf>,
    /// PEM private key path, used when `ssl` is set
    pub key: Option<PathBuf>,
}

/// Produce a one-shot static bundle of `input`.
pub async fn html_bundle(
    input: &Path,
    options: &BundleOptions,
    registry: &TemplateRegistry,
    engine: &dyn Engine,
) -> Result<BuildReport> {
    let engine_options = configure(input, options, registry)?;
    Ok(engine.bundle(&engine_options).await?)
}

/// Bundle `input` and serve the result over HTTP, or HTTPS when `ssl` is
/// set. The returned handle's lifetime is owned by the caller.
pub async fn http_bundle(
    input: &Path,
    options: &ServeBundleOptions,
    registry: &TemplateRegistry,
    engine: &dyn Engine,
) -> Result<ServerHandle> {
    let engine_options = configure(input, &options.bundle, registry)?;

    let mut serve = ServeOptions::new(options.port, options.host.clone());
    if options.ssl {
        // Missing cert/key paths are not validated here; the engine reports
        // the credential error, and it reaches the caller unchanged.
        serve = serve.with_tls(
            options.cert.clone().unwrap_or_default(),
            options.key.clone().unwrap_or_default(),
        );
    }

    Ok(engine.serve(&engine_options, &serve).await?)
}

/// Resolve, classify, prepare, and derive engine options.
fn configure(
    input: &Path,
    options: &BundleOptions,
    registry: &TemplateRegistry,
) -> Result<EngineOptions> {
    let cwd = std::env::current_dir()?;

    let resolved = registry.resolve_from(options.template.as_deref(), &cwd);
    let kind = templates::classify(&resolved);
    debug!(template = %resolved.display(), scaffold = %kind, "template resolved");

    let out_dir = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let input = if input.is_absolute() {
        input.to_path_buf()
    } else {
        cwd.join(input)
    };

    let prepared = templates::prepare(kind, &input, &resolved, &out_dir)?;
    Ok(EngineOptions::for_build(
        prepared.entrypoint,
        prepared.out_dir,
        options.watch,
        options.optimized,
    ))
}

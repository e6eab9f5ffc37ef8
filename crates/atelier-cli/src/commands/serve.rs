//! Serve command implementation.
//!
//! Implements `atelier serve`: bundles the input, then serves the build
//! output over HTTP, or HTTPS when `--ssl` is set. Runs until Ctrl-C or
//! until the server exits with an error.

use crate::bundle::{self, BundleOptions, ServeBundleOptions};
use crate::cli::ServeArgs;
use crate::config::AtelierConfig;
use crate::error::{Result, ResultExt};
use crate::ui;
use atelier_engine::{generate_self_signed, StaticEngine};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Execute the serve command.
///
/// With `--self-signed`, a throwaway localhost certificate is generated
/// under the output directory before the server starts.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = AtelierConfig::load(args.config.as_deref())?;
    config.apply_serve_args(&args);
    config.validate()?;

    let registry = super::make_registry(config.templates_root.as_ref())?;

    if args.self_signed && config.ssl {
        let (cert, key) = self_signed_paths(&config.output)?;
        config.cert = Some(cert);
        config.key = Some(key);
    }

    let options = ServeBundleOptions {
        bundle: BundleOptions {
            watch: config.watch,
            output: Some(config.output.clone()),
            template: config.template.clone(),
            optimized: config.optimized,
        },
        port: config.port,
        host: config.host.clone(),
        ssl: config.ssl,
        cert: config.cert.clone(),
        key: config.key.clone(),
    };

    let spinner = ui::Spinner::new(&format!("Bundling {}...", args.input.display()));
    let engine = StaticEngine::new();
    let mut handle = match bundle::http_bundle(&args.input, &options, &registry, &engine).await {
        Ok(handle) => {
            spinner.finish("Bundle complete");
            handle
        }
        Err(err) => {
            spinner.fail("Bundle failed");
            return Err(err);
        }
    };

    ui::success(&format!("Serving at {}", handle.url()));
    if config.watch {
        ui::info("Watching for changes; edits trigger a rebuild");
    }
    ui::info("Press Ctrl-C to stop");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
        result = handle.finished() => {
            // Server exited on its own; propagate whatever it reported.
            return Ok(result?);
        }
    }

    handle.shutdown().await?;
    ui::success("Server stopped");
    Ok(())
}

/// Generate a self-signed certificate under the output directory and
/// return the (cert, key) paths.
fn self_signed_paths(out_dir: &PathBuf) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir).with_path(out_dir)?;
    let cert = out_dir.join("cert.pem");
    let key = out_dir.join("key.pem");
    generate_self_signed(&cert, &key)?;
    info!(cert = %cert.display(), "generated self-signed certificate");
    Ok((cert, key))
}

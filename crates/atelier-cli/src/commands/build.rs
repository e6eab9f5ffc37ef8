//! Build command implementation.
//!
//! Implements `atelier build`: resolves the template, stages the scaffold
//! around the input component, and hands the prepared entrypoint to the
//! engine for a one-shot bundle.

use crate::bundle::{self, BundleOptions};
use crate::cli::BuildArgs;
use crate::config::AtelierConfig;
use crate::ui;
use atelier_engine::StaticEngine;
use std::time::Instant;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Build the template registry
/// 3. Resolve, classify, and stage the template
/// 4. Bundle through the engine
/// 5. Display the bundle summary
///
/// # Errors
///
/// Returns errors for invalid configuration, missing entry files, and
/// engine failures.
pub async fn execute(args: BuildArgs) -> crate::error::Result<()> {
    let start_time = Instant::now();

    let mut config = AtelierConfig::load(args.config.as_deref())?;
    config.apply_build_args(&args);
    config.validate()?;

    let registry = super::make_registry(config.templates_root.as_ref())?;

    let options = BundleOptions {
        watch: config.watch,
        output: Some(config.output.clone()),
        template: config.template.clone(),
        optimized: config.optimized,
    };

    let spinner = ui::Spinner::new(&format!("Bundling {}...", args.input.display()));
    let engine = StaticEngine::new();
    let report = match bundle::html_bundle(&args.input, &options, &registry, &engine).await {
        Ok(report) => {
            spinner.finish("Bundle complete");
            report
        }
        Err(err) => {
            spinner.fail("Bundle failed");
            return Err(err);
        }
    };

    ui::print_bundle_summary(&report);
    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}

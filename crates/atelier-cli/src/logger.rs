//! Logging setup for the atelier CLI.
//!
//! Structured logging via the `tracing` ecosystem with three verbosity
//! levels (`--verbose`, default, `--quiet`) and `RUST_LOG` override.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Call once at program start. Level selection order: `--verbose`,
/// `--quiet`, `RUST_LOG`, then the default info filter.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("atelier_cli=debug,atelier_engine=debug")
    } else if quiet {
        EnvFilter::new("atelier_cli=error,atelier_engine=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("atelier_cli=info,atelier_engine=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether colored terminal output should be enabled.
///
/// Honors the `NO_COLOR` and `FORCE_COLOR` conventions, then falls back to
/// terminal capability detection.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::Term::stdout().features().colors_supported()
}

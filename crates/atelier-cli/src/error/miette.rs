//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use atelier_engine::EngineError;
use miette::Report;

/// Convert a `CliError` to a miette Report for terminal rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Engine(e) => engine_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        other => miette::miette!("{}", other),
    }
}

fn engine_error_to_miette(err: EngineError) -> Report {
    match err {
        EngineError::EntryNotFound(path) => miette::miette!(
            "Entrypoint not found: {}\n\nHint: Check the template identifier or pass --template <name-or-path>",
            path.display()
        ),
        EngineError::Bind { addr, source } => miette::miette!(
            "Failed to bind {}: {}\n\nHint: Another process may be using the port; try --port 0 for an ephemeral one",
            addr,
            source
        ),
        EngineError::Tls(msg) => miette::miette!(
            "TLS error: {}\n\nHint: Pass --cert/--key PEM files, or --self-signed for a development certificate",
            msg
        ),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn entry_not_found_report_includes_a_hint() {
        let report = cli_error_to_miette(CliError::Engine(EngineError::EntryNotFound(
            PathBuf::from("missing/index.html"),
        )));
        let rendered = format!("{report}");
        assert!(rendered.contains("missing/index.html"));
        assert!(rendered.contains("Hint:"));
    }
}

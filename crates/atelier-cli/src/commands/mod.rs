//! Command implementations for the atelier CLI.
//!
//! - [`build`] - Produce a static bundle
//! - [`serve`] - Bundle and serve over HTTP(S)
//! - [`templates`] - List the built-in templates
//!
//! Each command lives in its own module and provides an `execute` function
//! that takes the parsed command arguments and returns a Result.

pub mod build;
pub mod serve;
pub mod templates;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use serve::execute as serve_execute;
pub use templates::execute as templates_execute;

use crate::embedded;
use crate::error::Result;
use crate::templates::TemplateRegistry;
use std::path::PathBuf;

/// Build the template registry for a command invocation.
///
/// A `--templates-root` flag or config value points the registry at an
/// existing directory; otherwise the embedded scaffolds are materialized
/// and used as the root.
pub(crate) fn make_registry(override_root: Option<&PathBuf>) -> Result<TemplateRegistry> {
    let root = match override_root {
        Some(root) => root.clone(),
        None => embedded::templates_root()?,
    };
    Ok(TemplateRegistry::new(root))
}

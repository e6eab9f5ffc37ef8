//! Atelier CLI - template-driven bundling for single components.
//!
//! This crate provides the command-line interface around `atelier-engine`:
//! point it at a component file, and it selects a scaffold template, stages
//! a buildable project around the component, and bundles or serves it.
//!
//! # Architecture
//!
//! - [`templates`] - the built-in template registry, identifier resolution,
//!   and scaffold staging
//! - [`bundle`] - the two entry operations, `html_bundle` and `http_bundle`
//! - [`config`] - `atelier.config.json` handling with env and CLI overlays
//! - [`error`] - structured error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal UI utilities for spinners and formatted output
//! - [`embedded`] - scaffolds shipped inside the binary
//! - `commands` - individual CLI command implementations
//!
//! # Example
//!
//! ```rust
//! use atelier_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

// Public modules
pub mod bundle;
pub mod cli;
pub mod commands;
pub mod config;
pub mod embedded;
pub mod error;
pub mod logger;
pub mod templates;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt, TemplateError};

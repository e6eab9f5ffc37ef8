//! Engine error types.
//!
//! Failures are surfaced to the caller without local recovery; the front-end
//! is expected to propagate them unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Entrypoint file doesn't exist when the engine finally reads it
    #[error("Entrypoint not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    /// Build-time failure (asset read/write, manifest serialization)
    #[error("Build failed: {0}")]
    Build(String),

    /// Server could not bind to the requested address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address the bind was attempted on
        addr: String,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// TLS credential loading or handshake setup failure
    #[error("TLS error: {0}")]
    Tls(String),

    /// File watcher failure in watch mode
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// True when the error is the deferred file-not-found produced by
    /// bundling a nonexistent entrypoint.
    pub fn is_entry_not_found(&self) -> bool {
        matches!(self, EngineError::EntryNotFound(_))
    }
}

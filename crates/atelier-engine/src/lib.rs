//! # atelier-engine
//!
//! Build engine boundary for the atelier scaffold bundler.
//!
//! This crate defines the contract the atelier front-end delegates to: a
//! configured [`EngineOptions`] bag derived from an entrypoint and output
//! directory, and an [`Engine`] capable of producing a one-shot static build
//! or a running HTTP(S) server over the build output.
//!
//! The bundled [`StaticEngine`] is a deliberately file-level implementation:
//! it copies and fingerprints assets without any module graph or transpilation,
//! which keeps it suitable as a default engine and as a seam for heavier
//! bundlers to plug into.
//!
//! ## Quick start
//!
//! ```no_run
//! use atelier_engine::{Engine, EngineOptions, StaticEngine};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = EngineOptions::for_build("app/index.html", "dist", false, true);
//! let report = StaticEngine::new().bundle(&options).await?;
//! println!("{} assets", report.assets.len());
//! # Ok(()) }
//! ```

mod engine;
mod error;
mod options;
mod server;
mod static_engine;
mod tls;
mod watcher;

pub use engine::{BuildReport, BuiltAsset, Engine, ServerHandle};
pub use error::EngineError;
pub use options::{EngineOptions, ServeOptions, TlsIdentity, CACHE_SUBDIR, HTML_SUBDIR};
pub use static_engine::StaticEngine;
pub use tls::generate_self_signed;

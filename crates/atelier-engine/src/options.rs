//! Engine configuration derived from caller options.
//!
//! [`EngineOptions::for_build`] is the single place where the optimized flag
//! fans out into the concrete engine switches (source maps, minification,
//! content hashing) and where the fixed output subdirectories are derived.

use std::path::{Path, PathBuf};

/// Name of the HTML/asset output subdirectory under the output directory.
pub const HTML_SUBDIR: &str = "html";

/// Name of the cache subdirectory under the output directory.
pub const CACHE_SUBDIR: &str = "cache";

/// Fully derived engine configuration for one build or serve invocation.
///
/// Constructed once per invocation and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Root source file the build starts traversal from
    pub entrypoint: PathBuf,
    /// Output directory the subdirectories hang off
    pub out_dir: PathBuf,
    /// Where built HTML and assets land (`<out_dir>/html`)
    pub html_dir: PathBuf,
    /// Where build bookkeeping lands (`<out_dir>/cache`)
    pub cache_dir: PathBuf,
    /// Rebuild on source changes while serving
    pub watch: bool,
    /// Production build
    pub production: bool,
    /// Emit source map references (development aid, off when optimized)
    pub source_maps: bool,
    /// Minify HTML output
    pub minify: bool,
    /// Fingerprint asset filenames with a content hash
    pub content_hash: bool,
    /// Automatic dependency installation. Always disabled.
    pub auto_install: bool,
}

impl EngineOptions {
    /// Derive engine options from an entrypoint, output directory, and the
    /// caller's watch/optimized flags.
    pub fn for_build(
        entrypoint: impl Into<PathBuf>,
        out_dir: impl AsRef<Path>,
        watch: bool,
        optimized: bool,
    ) -> Self {
        let out_dir = out_dir.as_ref().to_path_buf();
        Self {
            entrypoint: entrypoint.into(),
            html_dir: out_dir.join(HTML_SUBDIR),
            cache_dir: out_dir.join(CACHE_SUBDIR),
            out_dir,
            watch,
            production: optimized,
            source_maps: !optimized,
            minify: optimized,
            content_hash: optimized,
            auto_install: false,
        }
    }
}

/// Server-side options for the serve operation.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Port to listen on. Port 0 requests an ephemeral port.
    pub port: u16,
    /// Host or IP to bind
    pub host: String,
    /// TLS identity; `None` serves plain HTTP
    pub tls: Option<TlsIdentity>,
}

impl ServeOptions {
    /// Plain HTTP serve options.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            tls: None,
        }
    }

    /// Attach a TLS certificate/key pair.
    pub fn with_tls(mut self, cert: impl Into<PathBuf>, key: impl Into<PathBuf>) -> Self {
        self.tls = Some(TlsIdentity {
            cert: cert.into(),
            key: key.into(),
        });
        self
    }
}

/// A PEM certificate/private-key pair on disk.
#[derive(Debug, Clone)]
pub struct TlsIdentity {
    /// PEM-encoded certificate chain
    pub cert: PathBuf,
    /// PEM-encoded private key (PKCS#8 or RSA)
    pub key: PathBuf,
}

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available atelier subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Produce a static bundle
    ///
    /// Resolves the template, stages the scaffold for your input component,
    /// and writes the build output under the output directory.
    Build(BuildArgs),

    /// Bundle and serve over HTTP(S)
    ///
    /// Performs a build, then serves the result. With --ssl the server
    /// terminates TLS using the given certificate and key.
    Serve(ServeArgs),

    /// List the built-in templates
    Templates(TemplatesArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Component or module to bundle
    ///
    /// The entry the scaffold mounts: an .svelte component for svelte
    /// templates, a React component module for react templates.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for bundled files
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Template to use: a built-in name (svelte, react) or a path
    ///
    /// Unknown names are treated as paths relative to the working
    /// directory, so custom template directories need no registration.
    #[arg(short = 't', long, value_name = "NAME_OR_PATH")]
    pub template: Option<String>,

    /// Production build: minify, content-hash assets, drop source maps
    #[arg(long)]
    pub optimized: bool,

    /// Rebuild on source changes
    #[arg(long)]
    pub watch: bool,

    /// Path to atelier.config.json
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the built-in templates root directory
    #[arg(long, value_name = "DIR")]
    pub templates_root: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Component or module to bundle and serve
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for bundled files
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Template to use: a built-in name (svelte, react) or a path
    #[arg(short = 't', long, value_name = "NAME_OR_PATH")]
    pub template: Option<String>,

    /// Production build: minify, content-hash assets, drop source maps
    #[arg(long)]
    pub optimized: bool,

    /// Rebuild on source changes
    #[arg(long)]
    pub watch: bool,

    /// Port to listen on (0 picks an ephemeral port)
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Terminate TLS
    #[arg(long)]
    pub ssl: bool,

    /// PEM certificate for TLS
    #[arg(long, value_name = "FILE", requires = "ssl")]
    pub cert: Option<PathBuf>,

    /// PEM private key for TLS
    #[arg(long, value_name = "FILE", requires = "ssl")]
    pub key: Option<PathBuf>,

    /// Generate a self-signed localhost certificate for TLS
    #[arg(long, requires = "ssl", conflicts_with_all = ["cert", "key"])]
    pub self_signed: bool,

    /// Path to atelier.config.json
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the built-in templates root directory
    #[arg(long, value_name = "DIR")]
    pub templates_root: Option<PathBuf>,
}

/// Arguments for the templates command
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Override the built-in templates root directory
    #[arg(long, value_name = "DIR")]
    pub templates_root: Option<PathBuf>,
}

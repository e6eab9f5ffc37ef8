//! Command-line interface definition.
//!
//! Clap v4 derive structure with global verbosity flags and three
//! subcommands: `build`, `serve`, and `templates`.

mod commands;
mod tests;

use clap::Parser;

pub use commands::{BuildArgs, Command, ServeArgs, TemplatesArgs};

/// Atelier - bundle UI scaffolds and serve them during development
#[derive(Parser, Debug)]
#[command(
    name = "atelier",
    version,
    about = "Bundle UI scaffolds and serve them during development",
    long_about = "Atelier picks a UI template (a built-in svelte or react scaffold, or a\n\
                  directory of your own), wires your component into it, and either produces\n\
                  a static bundle or serves it over HTTP(S) with optional watch mode."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

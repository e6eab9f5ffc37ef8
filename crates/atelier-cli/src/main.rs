//! Atelier CLI entry point.
//!
//! Handles command-line argument parsing, logging initialization, and
//! command dispatch.

use atelier_cli::{cli, commands, error, logger};
use clap::Parser;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args).await,
        cli::Command::Serve(serve_args) => commands::serve_execute(serve_args).await,
        cli::Command::Templates(templates_args) => commands::templates_execute(templates_args).await,
    };

    // Convert CLI errors to miette diagnostics for readable error reporting
    result.map_err(error::cli_error_to_miette)
}

//! Templates command implementation.
//!
//! Lists the built-in template names, their entrypoints, and the registry
//! root they resolve against.

use crate::cli::TemplatesArgs;
use crate::error::Result;
use crate::templates::DEFAULT_TEMPLATE;
use owo_colors::OwoColorize;

/// Execute the templates command.
pub async fn execute(args: TemplatesArgs) -> Result<()> {
    let registry = super::make_registry(args.templates_root.as_ref())?;

    println!("{}", "Built-in templates".bold().underline());
    println!("  root: {}\n", registry.root().display().to_string().dimmed());

    for (name, entrypoint) in registry.entries() {
        let marker = if name == DEFAULT_TEMPLATE {
            " (default)".green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            "▸".blue(),
            name.bright_white().bold(),
            marker
        );
        println!("    entrypoint: {}", entrypoint.display());
    }

    println!("\nAny other identifier is treated as a path relative to the working directory.");
    Ok(())
}

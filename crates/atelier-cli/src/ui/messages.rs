//! Status message functions for terminal output.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use atelier_cli::ui::success;
///
/// success("Bundle written to dist/html");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
///
/// # Examples
///
/// ```no_run
/// use atelier_cli::ui::info;
///
/// info("Staging template files...");
/// ```
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use atelier_cli::ui::warning;
///
/// warning("Template directory has no App.svelte, assuming React layout");
/// ```
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
///
/// # Examples
///
/// ```no_run
/// use atelier_cli::ui::error;
///
/// error("Failed to read configuration file");
/// ```
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

//! Formatting utilities for sizes, durations, and bundle summaries.

use atelier_engine::BuildReport;
use console::Term;
use owo_colors::OwoColorize;
use std::time::Duration;

/// Format file size in human-readable format.
///
/// Converts bytes to the most appropriate unit (B, KB, MB, GB).
///
/// # Examples
///
/// ```
/// use atelier_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// Converts to the most appropriate unit (ms, s, m:s).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use atelier_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

/// Print a bundle summary table to stderr.
///
/// Lists each produced asset with its size, then a total line with the
/// overall size and build time.
pub fn print_bundle_summary(report: &BuildReport) {
    let term = Term::stderr();
    let width = term.size().1 as usize;

    eprintln!("\n{}", "Bundle Summary".bold().underline());
    eprintln!("{}", "─".repeat(width.min(80)));

    for asset in &report.assets {
        eprintln!(
            "  {} {} {}",
            "▸".blue(),
            asset.name.bright_white().bold(),
            format_size(asset.size).dimmed()
        );
    }

    eprintln!("{}", "─".repeat(width.min(80)));

    eprintln!(
        "  {} {} in {}",
        "Total:".bold(),
        format_size(report.total_size()).green(),
        format_duration(report.duration).green()
    );
}

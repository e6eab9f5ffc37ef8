//! Terminal UI utilities: status messages, formatting, and a spinner.

mod format;
mod messages;
mod spinner;

pub use format::{format_duration, format_size, print_bundle_summary};
pub use messages::{error, info, success, warning};
pub use spinner::Spinner;

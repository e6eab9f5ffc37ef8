//! Template selection core.
//!
//! Three pieces, leaf first:
//!
//! - [`TemplateRegistry`] - the fixed mapping from short template names to
//!   built-in scaffold entry files under an injected templates root.
//! - Resolution ([`TemplateRegistry::resolve_from`]) - turning an optional
//!   caller-supplied identifier into a concrete filesystem path, without
//!   touching the disk.
//! - [`classify`] / [`prepare`] - deciding which scaffold family owns a
//!   resolved template by probing for the Svelte marker file, then staging
//!   that family's build layout.

mod registry;
mod scaffold;

pub use registry::{BuiltinTemplate, TemplateRegistry, BUILT_IN_TEMPLATES, DEFAULT_TEMPLATE};
pub use scaffold::{classify, classify_with, prepare, Preparation, ScaffoldKind, MARKER_FILE};

//! Built-in template registry and identifier resolution.

use std::path::{Path, PathBuf};

/// One built-in scaffold: a short name and the entry file location relative
/// to the templates root. The table is declared statically rather than
/// derived from the directory layout so the mapping is testable on its own.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    /// Short name callers use as a template identifier
    pub name: &'static str,
    /// Entry file path relative to the templates root
    pub entrypoint: &'static str,
}

/// The built-in scaffolds shipped with atelier.
pub const BUILT_IN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        name: "svelte",
        entrypoint: "svelte/index.js",
    },
    BuiltinTemplate {
        name: "react",
        entrypoint: "react/index.js",
    },
];

/// Short name of the template used when the caller supplies none.
pub const DEFAULT_TEMPLATE: &str = "svelte";

/// Immutable mapping from short names to built-in template entry files.
///
/// Built once from an injected templates root; multiple registries with
/// different roots can coexist. Resolution is purely syntactic - no path
/// returned here is checked for existence.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
    entries: Vec<(String, PathBuf)>,
}

impl TemplateRegistry {
    /// Build the registry for a templates root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let entries = BUILT_IN_TEMPLATES
            .iter()
            .map(|t| (t.name.to_string(), root.join(t.entrypoint)))
            .collect();
        Self { root, entries }
    }

    /// The templates root this registry was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a built-in template's entry file by short name.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_path())
    }

    /// All registered (name, entry file) pairs.
    pub fn entries(&self) -> &[(String, PathBuf)] {
        &self.entries
    }

    /// Entry file of the default built-in template.
    pub fn default_entrypoint(&self) -> &Path {
        self.get(DEFAULT_TEMPLATE)
            .expect("default template is always registered")
    }

    /// Resolve an optional template identifier to a filesystem path.
    ///
    /// - Absent or empty identifier: the default built-in's entry file.
    /// - A registered short name: that built-in's entry file.
    /// - Anything else: the identifier joined onto `cwd`.
    ///
    /// Resolution never fails and never inspects the disk; an unresolvable
    /// custom path only surfaces later, when the scaffold is classified and
    /// the engine tries to read it.
    pub fn resolve_from(&self, identifier: Option<&str>, cwd: &Path) -> PathBuf {
        match identifier {
            None | Some("") => self.default_entrypoint().to_path_buf(),
            Some(name) => match self.get(name) {
                Some(builtin) => builtin.to_path_buf(),
                None => cwd.join(name),
            },
        }
    }
}

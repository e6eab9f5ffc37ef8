//! Scaffold family discrimination and build preparation.
//!
//! Family membership is never declared by the caller; it is inferred from
//! the contents of the resolved entry file's directory. A directory carrying
//! the Svelte marker file next to the entry file belongs to the Svelte
//! family; everything else, including paths that do not exist, falls through
//! to React.

use crate::error::{Result, TemplateError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Canonical Svelte entry component. Its presence next to a template's
/// entry file is what marks the template as a Svelte scaffold.
pub const MARKER_FILE: &str = "App.svelte";

/// The two supported scaffold families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldKind {
    /// Templates carrying `App.svelte` next to their entry file
    Svelte,
    /// The fallback for everything else
    React,
}

impl fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldKind::Svelte => write!(f, "svelte"),
            ScaffoldKind::React => write!(f, "react"),
        }
    }
}

/// Directory whose contents decide the scaffold family: the parent of the
/// resolved entry-file path. Derived syntactically, without touching disk.
fn marker_dir(resolved: &Path) -> &Path {
    resolved.parent().unwrap_or_else(|| Path::new("."))
}

/// Directory to stage from: the resolved path's parent when it is an entry
/// file, otherwise the path itself (a directory, or nothing at all).
fn template_dir_of(resolved: &Path) -> PathBuf {
    if resolved.is_file() {
        marker_dir(resolved).to_path_buf()
    } else {
        resolved.to_path_buf()
    }
}

/// Classify a resolved template path with an injected existence probe.
///
/// Probes for the marker in the entry file's directory. Pure apart from the
/// probe, so tests can classify synthetic paths without real directories. A
/// missing directory yields [`ScaffoldKind::React`]; the resulting failure
/// is deferred to the engine, which reports the missing entrypoint when it
/// tries to read it.
pub fn classify_with(resolved: &Path, exists: impl Fn(&Path) -> bool) -> ScaffoldKind {
    if exists(&marker_dir(resolved).join(MARKER_FILE)) {
        ScaffoldKind::Svelte
    } else {
        ScaffoldKind::React
    }
}

/// Classify against the real filesystem.
pub fn classify(resolved: &Path) -> ScaffoldKind {
    let kind = classify_with(resolved, |p| p.exists());
    if kind == ScaffoldKind::React && !resolved.exists() {
        debug!(
            template = %resolved.display(),
            "resolved template does not exist; falling through to react"
        );
    }
    kind
}

/// A prepared build location: the entrypoint the engine starts from and the
/// output directory everything lands under.
#[derive(Debug, Clone)]
pub struct Preparation {
    /// HTML document the build starts traversal from
    pub entrypoint: PathBuf,
    /// Output directory passed through to the engine
    pub out_dir: PathBuf,
}

/// Stage a scaffold for building.
///
/// Copies the template directory into `<out_dir>/app` and generates the
/// family-specific mount module wiring the caller's `input` component in.
/// When the template directory does not exist nothing is staged; the
/// returned entrypoint points into the missing directory so the engine
/// reports the file-not-found.
pub fn prepare(
    kind: ScaffoldKind,
    input: &Path,
    resolved: &Path,
    out_dir: &Path,
) -> Result<Preparation> {
    let template_dir = template_dir_of(resolved);

    if !template_dir.is_dir() {
        return Ok(Preparation {
            entrypoint: template_dir.join("index.html"),
            out_dir: out_dir.to_path_buf(),
        });
    }

    let stage_dir = out_dir.join("app");
    copy_dir(&template_dir, &stage_dir).map_err(|source| TemplateError::StageFailed {
        path: template_dir.clone(),
        source,
    })?;

    let mount = match kind {
        ScaffoldKind::Svelte => svelte_mount(input),
        ScaffoldKind::React => react_mount(input),
    };
    fs::write(stage_dir.join("index.js"), mount).map_err(|source| TemplateError::StageFailed {
        path: stage_dir.clone(),
        source,
    })?;

    debug!(
        template = %template_dir.display(),
        stage = %stage_dir.display(),
        %kind,
        "scaffold staged"
    );

    Ok(Preparation {
        entrypoint: stage_dir.join("index.html"),
        out_dir: out_dir.to_path_buf(),
    })
}

/// Entry module mounting the caller's Svelte component.
fn svelte_mount(input: &Path) -> String {
    format!(
        "import App from \"{}\";\n\nconst app = new App({{ target: document.body }});\n\nexport default app;\n",
        import_path(input)
    )
}

/// Entry module mounting the caller's React component. Emitted without JSX
/// so the generated file needs no transform of its own.
fn react_mount(input: &Path) -> String {
    format!(
        "import React from \"react\";\nimport {{ createRoot }} from \"react-dom/client\";\nimport App from \"{}\";\n\ncreateRoot(document.getElementById(\"app\")).render(React.createElement(App));\n",
        import_path(input)
    )
}

fn import_path(input: &Path) -> String {
    input.display().to_string().replace('\\', "/")
}

fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(s) = name.to_str() {
            if s.starts_with('.') || s == "node_modules" {
                continue;
            }
        }
        let target = to.join(&name);
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

//! Built-in template scaffolds shipped inside the binary.
//!
//! The registry resolves template names against a directory on disk, so the
//! embedded scaffolds are materialized into a per-version cache directory
//! before resolution. Re-running with the same version reuses the cache.

use crate::error::{Result, ResultExt};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/templates"]
struct TemplateAssets;

/// Directory holding the materialized built-in scaffolds.
///
/// Writes every embedded file under `$TMPDIR/atelier-templates-{version}/`
/// the first time it is called for a given release, then returns the same
/// path on subsequent calls.
pub fn templates_root() -> Result<PathBuf> {
    let root = std::env::temp_dir().join(format!(
        "atelier-templates-{}",
        env!("CARGO_PKG_VERSION")
    ));
    materialize_into(&root)?;
    Ok(root)
}

/// Write all embedded scaffold files under `root`, skipping files that are
/// already present with the right content.
pub fn materialize_into(root: &Path) -> Result<()> {
    for name in TemplateAssets::iter() {
        let asset = TemplateAssets::get(&name).expect("iterated asset exists");
        let dest = root.join(name.as_ref());

        if let Ok(existing) = fs::read(&dest) {
            if existing == asset.data.as_ref() {
                continue;
            }
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
        fs::write(&dest, asset.data.as_ref()).with_path(&dest)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embeds_both_scaffolds() {
        let names: Vec<String> = TemplateAssets::iter().map(|n| n.to_string()).collect();
        assert!(names.iter().any(|n| n == "svelte/index.js"));
        assert!(names.iter().any(|n| n == "svelte/App.svelte"));
        assert!(names.iter().any(|n| n == "react/index.js"));
        assert!(!names.iter().any(|n| n == "react/App.svelte"));
    }

    #[test]
    fn test_materialize_writes_files() {
        let dir = TempDir::new().unwrap();
        materialize_into(dir.path()).unwrap();

        assert!(dir.path().join("svelte/index.js").is_file());
        assert!(dir.path().join("svelte/App.svelte").is_file());
        assert!(dir.path().join("react/index.js").is_file());
    }

    #[test]
    fn test_materialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        materialize_into(dir.path()).unwrap();
        materialize_into(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("svelte/index.js")).unwrap();
        assert!(!content.is_empty());
    }
}

//! File-level default engine.
//!
//! `StaticEngine` copies the entrypoint's directory into the html output
//! directory, optionally fingerprinting asset filenames and rewriting HTML
//! references, and records a build manifest in the cache directory. It does
//! no module graph resolution or transpilation; heavier bundlers implement
//! [`Engine`] themselves.

use crate::engine::{BuildReport, BuiltAsset, Engine, ServerHandle};
use crate::error::EngineError;
use crate::options::{EngineOptions, ServeOptions};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use walkdir::WalkDir;

/// Default engine implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEngine;

impl StaticEngine {
    /// Create a new static engine.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Engine for StaticEngine {
    async fn bundle(&self, options: &EngineOptions) -> Result<BuildReport, EngineError> {
        let options = options.clone();
        tokio::task::spawn_blocking(move || build_static(&options))
            .await
            .map_err(|e| EngineError::Build(format!("build task panicked: {e}")))?
    }

    async fn serve(
        &self,
        options: &EngineOptions,
        serve: &ServeOptions,
    ) -> Result<ServerHandle, EngineError> {
        crate::server::serve(*self, options, serve).await
    }
}

/// Build manifest written to the cache directory after every build.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    entrypoint: String,
    production: bool,
    content_hash: bool,
    assets: &'a [BuiltAsset],
}

pub(crate) fn build_static(options: &EngineOptions) -> Result<BuildReport, EngineError> {
    let started = Instant::now();

    let entry = options.entrypoint.as_path();
    if !entry.is_file() {
        return Err(EngineError::EntryNotFound(entry.to_path_buf()));
    }
    let source_root = entry.parent().unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(&options.html_dir)?;
    fs::create_dir_all(&options.cache_dir)?;

    let mut assets = Vec::new();
    // Original relative path -> emitted relative path, used for HTML rewrites.
    let mut renames: BTreeMap<String, String> = BTreeMap::new();
    let mut html_files: Vec<PathBuf> = Vec::new();

    for item in WalkDir::new(source_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_skipped(e.path(), source_root, &options.html_dir, &options.cache_dir))
    {
        let item = item.map_err(|e| EngineError::Build(format!("walk failed: {e}")))?;
        if !item.file_type().is_file() {
            continue;
        }
        let rel = item
            .path()
            .strip_prefix(source_root)
            .map_err(|e| EngineError::Build(format!("path escape: {e}")))?
            .to_path_buf();

        if rel.extension().and_then(|e| e.to_str()) == Some("html") {
            // HTML is emitted last so asset renames can be applied.
            html_files.push(rel);
            continue;
        }

        let bytes = fs::read(item.path())?;
        let out_rel = if options.content_hash {
            hashed_name(&rel, &bytes)
        } else {
            rel.clone()
        };
        record_rename(&mut renames, &rel, &out_rel);

        let out_path = options.html_dir.join(&out_rel);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let is_script = rel.extension().and_then(|e| e.to_str()) == Some("js");
        if is_script && options.source_maps {
            let map_name = format!("{}.map", file_name_of(&out_rel));
            let mut emitted = bytes.clone();
            emitted.extend_from_slice(format!("\n//# sourceMappingURL={map_name}\n").as_bytes());
            fs::write(&out_path, &emitted)?;
            write_identity_map(&out_path, &rel)?;
            assets.push(BuiltAsset {
                name: rel_string(&out_rel),
                size: emitted.len() as u64,
            });
        } else {
            fs::write(&out_path, &bytes)?;
            assets.push(BuiltAsset {
                name: rel_string(&out_rel),
                size: bytes.len() as u64,
            });
        }
    }

    for rel in html_files {
        let mut html = fs::read_to_string(source_root.join(&rel))?;
        for (from, to) in &renames {
            if from != to {
                html = html.replace(from, to);
            }
        }
        if options.minify {
            html = minify_html(&html);
        }
        let out_path = options.html_dir.join(&rel);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, html.as_bytes())?;
        assets.push(BuiltAsset {
            name: rel_string(&rel),
            size: html.len() as u64,
        });
    }

    let manifest = Manifest {
        entrypoint: entry.display().to_string(),
        production: options.production,
        content_hash: options.content_hash,
        assets: &assets,
    };
    let manifest_json = serde_json::to_vec_pretty(&manifest)
        .map_err(|e| EngineError::Build(format!("manifest serialization: {e}")))?;
    fs::write(options.cache_dir.join("manifest.json"), manifest_json)?;

    debug!(
        assets = assets.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "static build finished"
    );

    Ok(BuildReport {
        assets,
        duration: started.elapsed(),
    })
}

/// Skip hidden entries, node_modules, and the build's own output
/// subdirectories. Only `html_dir` and `cache_dir` are excluded, not the
/// whole output directory: the staged scaffold lives under `out_dir` too
/// and must be walked.
fn is_skipped(path: &Path, source_root: &Path, html_dir: &Path, cache_dir: &Path) -> bool {
    if path == source_root {
        return false;
    }
    if path.starts_with(html_dir) || path.starts_with(cache_dir) {
        return true;
    }
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.starts_with('.') || name == "node_modules",
        None => true,
    }
}

/// `app.js` + contents -> `app.3f9c2d1a.js`, preserving parent directories.
fn hashed_name(rel: &Path, bytes: &[u8]) -> PathBuf {
    let hash = seahash::hash(bytes);
    let digest = format!("{hash:016x}");
    let short = &digest[..8];

    let stem = rel
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("asset");
    let name = match rel.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}.{short}.{ext}"),
        None => format!("{stem}.{short}"),
    };
    match rel.parent() {
        Some(parent) if parent != Path::new("") => parent.join(name),
        _ => PathBuf::from(name),
    }
}

fn record_rename(renames: &mut BTreeMap<String, String>, from: &Path, to: &Path) {
    let from_s = rel_string(from);
    let to_s = rel_string(to);
    if from_s != to_s {
        renames.insert(from_s, to_s);
    }
}

fn rel_string(path: &Path) -> String {
    // Portable forward-slash form for manifest entries and HTML rewrites.
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_identity_map(out_path: &Path, source_rel: &Path) -> Result<(), EngineError> {
    let map = serde_json::json!({
        "version": 3,
        "sources": [rel_string(source_rel)],
        "names": [],
        "mappings": "",
    });
    let map_path = PathBuf::from(format!("{}.map", out_path.display()));
    fs::write(map_path, map.to_string())?;
    Ok(())
}

/// Strip indentation and blank lines. Conservative on purpose: inline
/// whitespace inside text nodes is left alone.
fn minify_html(html: &str) -> String {
    html.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scaffold(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("index.html"),
            "<html>\n  <head>\n    <script src=\"app.js\"></script>\n  </head>\n</html>\n",
        )
        .unwrap();
        fs::write(dir.join("app.js"), "console.log(\"hi\");\n").unwrap();
        fs::write(dir.join("style.css"), "body { margin: 0 }\n").unwrap();
    }

    #[test]
    fn missing_entrypoint_is_entry_not_found() {
        let temp = TempDir::new().unwrap();
        let opts = EngineOptions::for_build(
            temp.path().join("nope/index.html"),
            temp.path().join("dist"),
            false,
            false,
        );
        let err = build_static(&opts).unwrap_err();
        assert!(err.is_entry_not_found());
    }

    #[test]
    fn development_build_copies_assets_and_emits_source_maps() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        scaffold(&app);

        let opts =
            EngineOptions::for_build(app.join("index.html"), temp.path().join("dist"), false, false);
        let report = build_static(&opts).unwrap();

        assert!(opts.html_dir.join("index.html").is_file());
        assert!(opts.html_dir.join("app.js").is_file());
        assert!(opts.html_dir.join("app.js.map").is_file());
        assert!(opts.cache_dir.join("manifest.json").is_file());

        let js = fs::read_to_string(opts.html_dir.join("app.js")).unwrap();
        assert!(js.contains("sourceMappingURL=app.js.map"));
        assert_eq!(report.assets.len(), 3);
    }

    #[test]
    fn sources_staged_under_the_output_directory_are_bundled() {
        // The normal layout: the scaffold is staged into <out_dir>/app and
        // the entrypoint lives there, next to html/ and cache/.
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");
        let app = out.join("app");
        scaffold(&app);

        let opts = EngineOptions::for_build(app.join("index.html"), &out, false, false);
        let report = build_static(&opts).unwrap();

        assert!(opts.html_dir.join("index.html").is_file());
        assert!(opts.html_dir.join("app.js").is_file());
        assert_eq!(report.assets.len(), 3);

        // A second build must not re-ingest its own html/cache output.
        let report = build_static(&opts).unwrap();
        assert_eq!(report.assets.len(), 3);
    }

    #[test]
    fn optimized_build_hashes_assets_and_rewrites_html() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        scaffold(&app);

        let opts =
            EngineOptions::for_build(app.join("index.html"), temp.path().join("dist"), false, true);
        let report = build_static(&opts).unwrap();

        // No plain app.js, a fingerprinted one instead.
        assert!(!opts.html_dir.join("app.js").exists());
        let hashed = report
            .assets
            .iter()
            .find(|a| a.name.starts_with("app.") && a.name.ends_with(".js"))
            .expect("hashed js asset");
        assert_ne!(hashed.name, "app.js");

        let html = fs::read_to_string(opts.html_dir.join("index.html")).unwrap();
        assert!(html.contains(&hashed.name));
        assert!(!html.contains("app.js\""));
        // Minified: no leading indentation survives.
        assert!(!html.contains("\n  "));
        // No source maps in production.
        assert!(!opts
            .html_dir
            .join(format!("{}.map", hashed.name))
            .exists());
    }

    #[test]
    fn nested_output_directory_is_not_recursively_copied() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        scaffold(&app);
        // Output inside the source directory.
        let opts = EngineOptions::for_build(app.join("index.html"), app.join("dist"), false, false);
        build_static(&opts).unwrap();
        // Second build must not pick up the first build's output.
        let report = build_static(&opts).unwrap();
        assert!(report.assets.iter().all(|a| !a.name.starts_with("dist/")));
    }

    #[test]
    fn hashed_name_keeps_parent_and_extension() {
        let name = hashed_name(Path::new("js/app.js"), b"bytes");
        let s = rel_string(&name);
        assert!(s.starts_with("js/app."));
        assert!(s.ends_with(".js"));
    }
}

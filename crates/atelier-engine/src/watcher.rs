//! Watch-mode rebuilds.
//!
//! Watches the entrypoint's directory and re-runs the static build on
//! changes, with a short debounce so editor save bursts produce one rebuild.

use crate::error::EngineError;
use crate::options::EngineOptions;
use crate::static_engine::build_static;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, warn};

const DEBOUNCE: Duration = Duration::from_millis(120);

/// Spawn a background task that rebuilds on source changes.
///
/// The notify watcher lives inside the spawned task; the task ends when the
/// runtime shuts down.
pub(crate) fn spawn_rebuilder(options: EngineOptions) -> Result<(), EngineError> {
    let root = options
        .entrypoint
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let (watcher, mut rx) = change_stream(
        root.clone(),
        options.html_dir.clone(),
        options.cache_dir.clone(),
    )?;

    tokio::spawn(async move {
        // Keeps the watcher registered for the lifetime of the task.
        let _watcher = watcher;

        while let Some(path) = rx.recv().await {
            debug!(path = %path.display(), "source changed, rebuilding");
            let opts = options.clone();
            match tokio::task::spawn_blocking(move || build_static(&opts)).await {
                Ok(Ok(report)) => debug!(
                    assets = report.assets.len(),
                    elapsed_ms = report.duration.as_millis() as u64,
                    "rebuild finished"
                ),
                Ok(Err(e)) => warn!("rebuild failed: {e}"),
                Err(e) => warn!("rebuild task panicked: {e}"),
            }
        }
    });

    debug!(root = %root.display(), "watching for changes");
    Ok(())
}

/// Debounced change stream over a directory tree.
fn change_stream(
    root: PathBuf,
    html_dir: PathBuf,
    cache_dir: PathBuf,
) -> Result<(RecommendedWatcher, mpsc::Receiver<PathBuf>), EngineError> {
    let (tx, rx) = mpsc::channel(64);
    let mut last_event: Option<(PathBuf, Instant)> = None;
    let watch_root = root.clone();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        let Ok(event) = res else { return };
        if !matches!(
            event.kind,
            notify::EventKind::Create(_) | notify::EventKind::Modify(_) | notify::EventKind::Remove(_)
        ) {
            return;
        }
        for path in &event.paths {
            if should_ignore(path, &watch_root, &html_dir, &cache_dir) {
                continue;
            }
            let now = Instant::now();
            if let Some((last_path, last_time)) = &last_event {
                if last_path == path && now.duration_since(*last_time) < DEBOUNCE {
                    continue;
                }
            }
            last_event = Some((path.clone(), now));
            let _ = tx.blocking_send(path.clone());
        }
    })?;

    watcher.watch(&root, RecursiveMode::Recursive)?;
    Ok((watcher, rx))
}

/// Rebuild output must not feed back into the watch loop; only the html and
/// cache subdirectories are excluded, since the watched staging area itself
/// sits under the output directory.
fn should_ignore(path: &Path, root: &Path, html_dir: &Path, cache_dir: &Path) -> bool {
    if !path.starts_with(root) || path.starts_with(html_dir) || path.starts_with(cache_dir) {
        return true;
    }
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|name| (name.starts_with('.') && name.len() > 1) || name == "node_modules")
            .unwrap_or(true)
    })
}

//! The engine contract and its result handles.

use crate::error::EngineError;
use crate::options::{EngineOptions, ServeOptions};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A build engine: turns a prepared entrypoint into a static build, or into
/// a running server over that build.
///
/// Implementations own all the heavy lifting (asset processing, serving);
/// callers own the lifetime of any returned [`ServerHandle`].
#[async_trait]
pub trait Engine: Send + Sync {
    /// Produce a one-shot static build.
    async fn bundle(&self, options: &EngineOptions) -> Result<BuildReport, EngineError>;

    /// Start a server over the build output, optionally TLS-terminated.
    ///
    /// Performs an initial build before binding. Bind and TLS credential
    /// failures are reported before the handle is returned.
    async fn serve(
        &self,
        options: &EngineOptions,
        serve: &ServeOptions,
    ) -> Result<ServerHandle, EngineError>;
}

/// One produced output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltAsset {
    /// Output path relative to the html directory
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// Result handle of a one-shot build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// Assets written to the html directory
    pub assets: Vec<BuiltAsset>,
    /// Wall-clock build time
    pub duration: Duration,
}

impl BuildReport {
    /// Total size of all produced assets in bytes.
    pub fn total_size(&self) -> u64 {
        self.assets.iter().map(|a| a.size).sum()
    }
}

/// Handle to a running server.
///
/// Dropping the handle does not stop the server task; call
/// [`ServerHandle::shutdown`] for a graceful stop or [`ServerHandle::wait`]
/// to block until the server exits on its own.
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    tls: bool,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), EngineError>>,
}

impl ServerHandle {
    pub(crate) fn new(
        addr: SocketAddr,
        tls: bool,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<Result<(), EngineError>>,
    ) -> Self {
        Self {
            addr,
            tls,
            shutdown: Some(shutdown),
            task,
        }
    }

    /// The address the server is bound to (useful with ephemeral ports).
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Whether the server terminates TLS.
    pub fn is_tls(&self) -> bool {
        self.tls
    }

    /// Browser-facing URL of the server.
    pub fn url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}", scheme, self.addr)
    }

    /// Signal a graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(mut self) -> Result<(), EngineError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.join().await
    }

    /// Wait until the server exits (error or external shutdown).
    pub async fn wait(self) -> Result<(), EngineError> {
        self.join().await
    }

    /// Resolve when the server task exits, without consuming the handle.
    ///
    /// Lets callers race the server against other futures (e.g. a signal
    /// handler) and still call [`ServerHandle::shutdown`] afterwards.
    pub async fn finished(&mut self) -> Result<(), EngineError> {
        match (&mut self.task).await {
            Ok(result) => result,
            Err(join_err) => Err(EngineError::Build(format!(
                "server task panicked: {join_err}"
            ))),
        }
    }

    async fn join(self) -> Result<(), EngineError> {
        match self.task.await {
            Ok(result) => result,
            Err(join_err) => Err(EngineError::Build(format!(
                "server task panicked: {join_err}"
            ))),
        }
    }
}

//! HTTP(S) serving over the build output.
//!
//! The server is a static file router over the html directory. TLS
//! credentials are loaded before binding so that credential errors surface
//! ahead of any socket work.

use crate::engine::{Engine, ServerHandle};
use crate::error::EngineError;
use crate::options::{EngineOptions, ServeOptions};
use crate::static_engine::StaticEngine;
use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::service::TowerToHyperService;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_rustls::TlsAcceptor;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, info};

pub(crate) async fn serve(
    engine: StaticEngine,
    options: &EngineOptions,
    serve: &ServeOptions,
) -> Result<ServerHandle, EngineError> {
    // Initial build; a missing entrypoint fails here, not after binding.
    engine.bundle(options).await?;

    let tls_config = match &serve.tls {
        Some(identity) => Some(Arc::new(crate::tls::build_server_config(identity)?)),
        None => None,
    };

    let addr = format!("{}:{}", serve.host, serve.port);
    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| EngineError::Bind {
            addr: addr.clone(),
            source: e,
        })?;
    let local_addr = listener.local_addr()?;

    if options.watch {
        crate::watcher::spawn_rebuilder(options.clone())?;
    }

    let app = router(options.html_dir.clone());
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let is_tls = tls_config.is_some();

    let task = match tls_config {
        None => tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .map_err(|e| EngineError::Build(format!("server error: {e}")))
        }),
        Some(config) => tokio::spawn(serve_tls(listener, config, app, shutdown_rx)),
    };

    info!(
        addr = %local_addr,
        tls = is_tls,
        "server listening"
    );

    Ok(ServerHandle::new(local_addr, is_tls, shutdown_tx, task))
}

/// Static file router over the html directory with permissive dev CORS.
fn router(html_dir: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(html_dir).append_index_html_on_directories(true))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// TLS accept loop: handshake per connection, then hand the stream to hyper.
async fn serve_tls(
    listener: TcpListener,
    config: Arc<rustls::ServerConfig>,
    app: Router,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), EngineError> {
    let acceptor = TlsAcceptor::from(config);

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => return Ok(()),
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                let acceptor = acceptor.clone();
                let app = app.clone();

                tokio::spawn(async move {
                    let stream = match acceptor.accept(stream).await {
                        Ok(s) => s,
                        Err(e) => {
                            debug!(%peer, "TLS handshake failed: {e}");
                            return;
                        }
                    };

                    let service = TowerToHyperService::new(app);
                    if let Err(e) = hyper_util::server::conn::auto::Builder::new(TokioExecutor::new())
                        .serve_connection_with_upgrades(TokioIo::new(stream), service)
                        .await
                    {
                        debug!(%peer, "connection error: {e}");
                    }
                });
            }
        }
    }
}

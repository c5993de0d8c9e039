// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Accept loop.
//!
//! `axum::serve` has no knob for the request header read timeout, so
//! connections are driven by hyper-util directly.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto::Builder;
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;
use tokio::sync::Notify;

pub async fn bind(address: &str) -> Result<TcpListener> {
    TcpListener::bind(address)
        .await
        .with_context(|| format!("unable to listen on {address}"))
}

/// Serves `app` until `shutdown` resolves. Connections already accepted are
/// left to finish on their own tasks.
pub async fn serve<F>(listener: TcpListener, app: Router, header_read_timeout: Duration, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let mut builder = Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(header_read_timeout);

    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(error) => {
                    tracing::warn!(%error, "failed to accept connection");
                    continue;
                }
            },
            _ = &mut shutdown => break,
        };

        if let Err(error) = stream.set_nodelay(true) {
            tracing::debug!(%peer, %error, "unable to set TCP_NODELAY");
        }
        let io = TokioIo::new(stream);
        let service = TowerToHyperService::new(app.clone());
        let builder = builder.clone();

        tokio::spawn(async move {
            if let Err(error) = builder.serve_connection(io, service).await {
                tracing::debug!(%peer, %error, "connection closed with error");
            }
        });
    }

    tracing::info!("listener closed");
    Ok(())
}

/// Resolves on Ctrl+C, SIGTERM or a notification from `PUT /exit`.
pub async fn shutdown_signal(exit: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term_signal) => term_signal.recv().await,
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = exit.notified() => {},
    }

    tracing::info!("shutdown signal received");
}

//! Server lifecycle: middleware stack, listening and graceful shutdown.
//!
//! Shutdown is driven by an arbitrary future rather than by OS signals
//! directly. Once it resolves the server stops accepting connections and
//! gives in-flight requests up to the grace period to finish; after that it
//! stops waiting for them.

use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::request_id::{make_request_span, propagate_request_id, request_id_layer};
use crate::routes;
use crate::state::AppState;

/// How the server came to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every in-flight request finished within the grace period.
    Graceful,
    /// The grace period elapsed with requests still running.
    Forced,
}

/// Build the application: all routes plus the middleware stack.
///
/// Requests that take longer than the configured timeout to send their
/// body or to be answered are cut off.
pub fn build_app(state: AppState) -> Router {
    let timeout = state.config().request_timeout;
    with_middleware(routes::build_router(state), timeout, timeout)
}

/// Wrap `router` in the request ID, tracing and timeout layers.
///
/// A body still arriving after `read_timeout`, or a response not produced
/// within `write_timeout`, is answered with 408.
pub fn with_middleware(router: Router, read_timeout: Duration, write_timeout: Duration) -> Router {
    router
        .layer(RequestBodyTimeoutLayer::new(read_timeout))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, write_timeout))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(request_id_layer())
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain.
///
/// Returns once every connection has closed, or once `grace` has elapsed
/// after shutdown began, whichever comes first.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    tracing::info!(address = %listener.local_addr()?, "server listening");

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("shutting down server gracefully");
            let _ = drain_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result?;
            tracing::info!("server stopped");
            return Ok(ShutdownOutcome::Graceful);
        }
        Ok(()) = drain_rx => {}
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => {
            result?;
            tracing::info!("server stopped");
            Ok(ShutdownOutcome::Graceful)
        }
        Err(_) => {
            tracing::error!(
                grace_secs = grace.as_secs_f64(),
                "failed to shutdown server properly: grace period elapsed"
            );
            Ok(ShutdownOutcome::Forced)
        }
    }
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(address = %config.addr, "starting server");

    let listener = TcpListener::bind(config.addr).await.map_err(|e| {
        tracing::error!(address = %config.addr, error = %e, "failed to start server");
        e
    })?;

    let grace = config.shutdown_grace;
    let state = AppState::new(notes_store::NoteStore::new(), config);

    serve(listener, build_app(state), shutdown, grace).await
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

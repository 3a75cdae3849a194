//! Risk Registry API server.
//!
//! Serves the risks API over HTTP, backed by an in-memory store that lives
//! for the lifetime of the process.

mod config;
mod logging;
mod openapi;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use config::Config;
use openapi::openapi_routes;
use risk_api::{risks_router, RiskStore};
use tokio::signal;
use tokio::sync::Notify;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        shutdown_grace_secs = config.shutdown_grace.as_secs(),
        "Starting risk registry API"
    );

    let store = Arc::new(RiskStore::new());
    let app = build_app(store);

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let shutdown_started = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Arc::clone(&shutdown_started)))
        .into_future();

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        () = drain_deadline(shutdown_started, config.shutdown_grace) => {
            tracing::error!(
                grace_secs = config.shutdown_grace.as_secs(),
                "Server forced to shutdown: in-flight requests did not finish in time"
            );
            std::process::exit(1);
        }
    }

    info!("Server exited");
}

/// Compose the full application router.
///
/// `PropagateRequestIdLayer` must be outermost so the generated id reaches
/// the response.
fn build_app(store: Arc<RiskStore>) -> Router {
    risks_router(store)
        .merge(openapi_routes())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Resolves once the grace period has elapsed after shutdown began.
async fn drain_deadline(shutdown_started: Arc<Notify>, grace: Duration) {
    shutdown_started.notified().await;
    tokio::time::sleep(grace).await;
}

/// Graceful shutdown signal handler.
///
/// Notifies `shutdown_started` before returning so the drain deadline starts
/// counting when axum stops accepting connections.
async fn shutdown_signal(shutdown_started: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    info!("Server shutting down...");
    shutdown_started.notify_one();
}

//! Router assembly and the listening loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use signal_core::config::SignalConfig;
use signal_core::traits::SignalTimer;
use signal_timing::SignalTimingEngine;

use crate::routes;

/// Shared handler state. The engine is stateless, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub timer: Arc<dyn SignalTimer>,
}

impl AppState {
    pub fn new(timer: Arc<dyn SignalTimer>) -> Self {
        Self { timer }
    }

    /// State backed by a [`SignalTimingEngine`] built from `config`.
    pub fn from_config(config: &SignalConfig) -> Self {
        Self::new(Arc::new(SignalTimingEngine::from_config(&config.timing)))
    }
}

/// Build the application router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/api/optimize", post(routes::optimize))
        .route("/api/optimize/vehicles", post(routes::optimize_vehicles))
        .route("/api/optimize/simple", post(routes::optimize_simple))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &SignalConfig) -> std::io::Result<()> {
    let addr: SocketAddr = config
        .server
        .effective_bind_addr()
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let app = router(AppState::from_config(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "signal api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

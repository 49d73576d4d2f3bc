//! Axum app: shared state and router.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use gearfinder::{ModelClient, RelaySettings};

use super::recommend::recommend_handler;

/// Shared state, injected into the router and cloned per request.
pub(crate) struct AppState {
    /// The model client behind the relay (Workers AI in production, a mock in tests).
    pub(crate) model: Arc<dyn ModelClient>,
    pub(crate) settings: RelaySettings,
    /// When set, the first relay request to finish sends on this to signal server
    /// exit (once mode).
    pub(crate) shutdown_tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

/// Router: the relay route plus a plain health check.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/recommend", post(recommend_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "ok"
}

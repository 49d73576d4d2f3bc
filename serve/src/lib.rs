//! HTTP server for the gearfinder relay (axum).
//!
//! Routes: `POST /api/recommend` (the relay), `GET /health`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`],
//! [`run_serve_on_listener_with`].

mod app;
mod recommend;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

use app::{router, AppState};
use gearfinder::{ModelClient, RelaySettings, WorkersAi};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Runs the server on an existing listener with an explicit model client and
/// relay settings. Tests bind `127.0.0.1:0`, pass a `MockModel` and a temp
/// results dir, and set `once` to exit after the first relay request.
pub async fn run_serve_on_listener_with(
    listener: TcpListener,
    model: Arc<dyn ModelClient>,
    settings: RelaySettings,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("gearfinder relay listening on http://{}", addr);
    if once {
        info!("will exit after first relay request (once mode, used by tests)");
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let state = Arc::new(AppState {
        model,
        settings,
        shutdown_tx: Arc::new(std::sync::Mutex::new(if once {
            Some(shutdown_tx)
        } else {
            None
        })),
    });

    let app = router(state);

    if once {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await?;
        info!("relay request done, exiting (once mode)");
    } else {
        axum::serve(listener, app).await?;
    }
    Ok(())
}

/// Runs the server on an existing listener with the production Workers AI client
/// and settings from the environment.
pub async fn run_serve_on_listener(
    listener: TcpListener,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let model: Arc<dyn ModelClient> = Arc::new(WorkersAi::from_env());
    run_serve_on_listener_with(listener, model, RelaySettings::from_env(), once).await
}

/// Runs the server. Listens on `addr`, else `GEARFINDER_ADDR`, else
/// `127.0.0.1:8080`.
pub async fn run_serve(
    addr: Option<&str>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = match addr {
        Some(a) => a.to_string(),
        None => std::env::var("GEARFINDER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
    };
    let listener = TcpListener::bind(&addr).await?;
    run_serve_on_listener(listener, once).await
}

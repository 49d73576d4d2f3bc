//! Handle `POST /api/recommend`: run the relay pipeline and map its outcome to
//! the wire contract.
//!
//! The handler takes the raw body and lets the relay parse it, so a malformed
//! body produces the same generic 500 as an upstream or filesystem failure
//! instead of axum's extractor rejection. Only the model-output parse failure
//! gets its own message.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::warn;

use gearfinder::{recommend_from_body, ErrorBody};

use super::app::AppState;

pub(crate) async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let result = recommend_from_body(state.model.as_ref(), &state.settings, &body).await;

    // Once mode: signal shutdown after this request; graceful shutdown still
    // delivers the response below.
    if let Ok(mut guard) = state.shutdown_tx.lock() {
        if let Some(tx) = guard.take() {
            let _ = tx.send(());
        }
    }

    match result {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(err) => {
            warn!(error = %err, "relay request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(err.public_message())),
            )
                .into_response()
        }
    }
}

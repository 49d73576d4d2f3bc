//! The prompt relay pipeline: build messages, invoke the model, persist the debug
//! record, parse the raw text as JSON, wrap it in the response envelope.
//!
//! Stateless; each call is independent network I/O plus one append-only file
//! write. No retry, no timeout beyond the HTTP client default, no dedup.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::debug_log::{self, DebugRecord};
use crate::error::RelayError;
use crate::llm::ModelClient;
use crate::prompt;
use crate::protocol::{RecommendRequest, ResponseEnvelope};

/// Default directory for per-request debug records.
pub const DEFAULT_RESULTS_DIR: &str = "model_results";

/// Relay knobs. Only the debug-record location for now.
#[derive(Clone, Debug)]
pub struct RelaySettings {
    pub results_dir: PathBuf,
}

impl Default for RelaySettings {
    fn default() -> Self {
        RelaySettings {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        }
    }
}

impl RelaySettings {
    /// `GEARFINDER_RESULTS_DIR`, falling back to [`DEFAULT_RESULTS_DIR`].
    pub fn from_env() -> Self {
        RelaySettings {
            results_dir: std::env::var("GEARFINDER_RESULTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESULTS_DIR)),
        }
    }
}

/// Runs one relay round trip for a query.
///
/// The debug record is written before the parse, so it exists regardless of
/// whether the model produced valid JSON and always holds the raw text.
pub async fn recommend(
    model: &dyn ModelClient,
    settings: &RelaySettings,
    query: &str,
) -> Result<ResponseEnvelope, RelayError> {
    let messages = prompt::build_messages(query);
    let raw = model.invoke(&messages).await?;
    debug!(%raw, "model response");

    let record = DebugRecord {
        query: query.to_string(),
        response: raw.clone(),
    };
    let path = debug_log::write_record(&settings.results_dir, &record).await?;
    debug!(path = %path.display(), "debug record written");

    let parsed: serde_json::Value = serde_json::from_str(&raw).map_err(RelayError::Parse)?;
    info!(query, "recommendation relay ok");
    Ok(ResponseEnvelope::new(parsed))
}

/// Relay entry for a raw HTTP body: parses `{ "prompt": ... }` itself so a
/// malformed body collapses into the same coarse failure as everything else.
pub async fn recommend_from_body(
    model: &dyn ModelClient,
    settings: &RelaySettings,
    body: &[u8],
) -> Result<ResponseEnvelope, RelayError> {
    let request: RecommendRequest =
        serde_json::from_slice(body).map_err(RelayError::BadRequest)?;
    recommend(model, settings, &request.prompt).await
}

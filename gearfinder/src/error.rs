//! Relay error type. Two coarse failure kinds reach the wire: a model reply that is
//! not JSON, and everything else; [`RelayError::public_message`] does that collapse.

use thiserror::Error;

/// Failures along the relay pipeline (request parse, upstream call, debug log,
/// model-output parse).
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound body was not a `{ "prompt": string }` object.
    #[error("request body is not a prompt object: {0}")]
    BadRequest(serde_json::Error),

    /// Transport-level failure talking to the inference endpoint.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream JSON did not carry `result.response`.
    #[error("upstream response missing result.response")]
    UpstreamShape,

    /// The model's raw text output was not valid JSON.
    #[error("model response is not valid JSON: {0}")]
    Parse(serde_json::Error),

    /// The best-effort debug record could not be written.
    #[error("debug record write failed: {0}")]
    DebugLog(#[from] std::io::Error),
}

impl RelayError {
    /// The message exposed to callers. Deliberately coarse: only the parse failure
    /// is distinguished; upstream outages and local bugs all read the same.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::Parse(_) => "Failed to parse model response",
            _ => "Failed to process request",
        }
    }
}

//! Backend abstraction used by the `gearfinder` CLI.
//!
//! Two execution modes:
//! - **LocalBackend**: run the relay pipeline in-process (own Workers AI call).
//! - **RemoteBackend**: POST to a running `gearfinder serve` over HTTP (default).
//!
//! Callers depend only on [`SearchBackend`], so switching local/remote is a
//! one-line decision in `main`.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use gearfinder::ResponseEnvelope;

/// One search failed. The message is what the front end surfaces in
/// `Idle.last_error`.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("{}", .0.public_message())]
    Relay(#[from] gearfinder::RelayError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Error body reported by the server.
    #[error("{0}")]
    Server(String),
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs one query end to end and returns the response envelope.
    async fn search(&self, query: &str) -> Result<ResponseEnvelope, SearchError>;
}

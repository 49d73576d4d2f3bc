//! Remote backend: POST the query to a running `gearfinder serve`.

use async_trait::async_trait;

use gearfinder::{ErrorBody, RecommendRequest, ResponseEnvelope};

use super::{SearchBackend, SearchError};

pub const DEFAULT_REMOTE_URL: &str = "http://127.0.0.1:8080";

pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteBackend {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `GEARFINDER_REMOTE_URL`, falling back to [`DEFAULT_REMOTE_URL`].
    pub fn from_env() -> Self {
        RemoteBackend::new(
            std::env::var("GEARFINDER_REMOTE_URL")
                .unwrap_or_else(|_| DEFAULT_REMOTE_URL.to_string()),
        )
    }

    fn recommend_url(&self) -> String {
        format!("{}/api/recommend", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchBackend for RemoteBackend {
    async fn search(&self, query: &str) -> Result<ResponseEnvelope, SearchError> {
        let response = self
            .client
            .post(self.recommend_url())
            .json(&RecommendRequest {
                prompt: query.to_string(),
            })
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json::<ResponseEnvelope>().await?);
        }

        // The server reports failures as { "error": string }; fall back to the
        // status line when even that does not parse.
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("server answered {status}"));
        Err(SearchError::Server(message))
    }
}

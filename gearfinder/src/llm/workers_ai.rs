//! Cloudflare Workers AI client: one non-streaming chat-completion style call.
//!
//! The endpoint wraps the model text in `{ "result": { "response": "<text>" } }`;
//! [`extract_reply`] pulls the text out and everything downstream treats it as an
//! opaque string.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ModelClient;
use crate::error::RelayError;
use crate::message::Message;

/// Fixed model identifier; only the API base is configurable.
pub const MODEL_ID: &str = "@cf/meta/llama-3.1-8b-instruct-fast";

const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Workers AI account-scoped `ai/run` client.
pub struct WorkersAi {
    client: reqwest::Client,
    api_base: String,
    account_id: String,
    api_token: String,
}

#[derive(Serialize)]
struct RunRequest<'a> {
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct RunResponse {
    result: RunResult,
}

#[derive(Deserialize)]
struct RunResult {
    response: String,
}

impl WorkersAi {
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        WorkersAi {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            account_id: account_id.into(),
            api_token: api_token.into(),
        }
    }

    /// Credentials from `CLOUDFLARE_ACCOUNT_ID` / `CLOUDFLARE_API_TOKEN`. Absence
    /// is not validated here: an empty credential surfaces as an authentication
    /// failure from the upstream call.
    pub fn from_env() -> Self {
        WorkersAi::new(
            std::env::var("CLOUDFLARE_ACCOUNT_ID").unwrap_or_default(),
            std::env::var("CLOUDFLARE_API_TOKEN").unwrap_or_default(),
        )
    }

    /// Overrides the API base (local gateway, test double). The account and model
    /// path segments stay fixed.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.api_base, self.account_id, MODEL_ID
        )
    }

    fn build_body<'a>(messages: &'a [Message]) -> RunRequest<'a> {
        RunRequest {
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role(),
                    content: m.content(),
                })
                .collect(),
            stream: false,
        }
    }
}

/// Parses the Workers AI success body and returns the raw model text.
fn extract_reply(body: &str) -> Result<String, RelayError> {
    let parsed: RunResponse =
        serde_json::from_str(body).map_err(|_| RelayError::UpstreamShape)?;
    Ok(parsed.result.response)
}

#[async_trait]
impl ModelClient for WorkersAi {
    async fn invoke(&self, messages: &[Message]) -> Result<String, RelayError> {
        let response = self
            .client
            .post(self.run_url())
            .bearer_auth(&self.api_token)
            .json(&Self::build_body(messages))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let reply = extract_reply(&body)?;
        debug!(chars = reply.len(), "model raw response received");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_url_has_account_and_model_segments() {
        let client = WorkersAi::new("acct123", "tok").with_api_base("http://127.0.0.1:9999");
        assert_eq!(
            client.run_url(),
            format!("http://127.0.0.1:9999/accounts/acct123/ai/run/{MODEL_ID}")
        );
    }

    #[test]
    fn body_serializes_roles_and_disables_streaming() {
        let messages = crate::prompt::build_messages("beginner kayaking");
        let body = serde_json::to_value(WorkersAi::build_body(&messages)).unwrap();
        assert_eq!(body["stream"], serde_json::json!(false));
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "beginner kayaking");
    }

    #[test]
    fn extract_reply_returns_raw_text() {
        let body = r#"{"result":{"response":"{\"item1\":{\"name\":\"Kayak\",\"description\":\"3 m\"}}"}}"#;
        let reply = extract_reply(body).unwrap();
        assert!(reply.starts_with("{\"item1\""));
    }

    #[test]
    fn extract_reply_rejects_missing_result() {
        let err = extract_reply(r#"{"success":false,"errors":[]}"#).unwrap_err();
        assert!(matches!(err, RelayError::UpstreamShape));
    }
}

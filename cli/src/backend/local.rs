//! In-process backend: the relay pipeline runs inside the CLI, no server needed.

use std::sync::Arc;

use async_trait::async_trait;

use gearfinder::{recommend, ModelClient, RelaySettings, ResponseEnvelope, WorkersAi};

use super::{SearchBackend, SearchError};

pub struct LocalBackend {
    model: Arc<dyn ModelClient>,
    settings: RelaySettings,
}

impl LocalBackend {
    pub fn new(model: Arc<dyn ModelClient>, settings: RelaySettings) -> Self {
        LocalBackend { model, settings }
    }

    /// Production wiring: Workers AI credentials and results dir from the
    /// environment.
    pub fn from_env() -> Self {
        LocalBackend::new(Arc::new(WorkersAi::from_env()), RelaySettings::from_env())
    }
}

#[async_trait]
impl SearchBackend for LocalBackend {
    async fn search(&self, query: &str) -> Result<ResponseEnvelope, SearchError> {
        Ok(recommend(self.model.as_ref(), &self.settings, query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearfinder::MockModel;

    #[tokio::test]
    async fn local_search_runs_the_relay() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(
            Arc::new(MockModel::new(
                r#"{"item1":{"name":"Kayak","description":"3 m"}}"#,
            )),
            RelaySettings {
                results_dir: tmp.path().join("model_results"),
            },
        );

        let envelope = backend.search("beginner kayaking").await.unwrap();
        assert_eq!(envelope.result.response["item1"]["name"], "Kayak");
    }

    #[tokio::test]
    async fn local_search_surfaces_the_coarse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(
            Arc::new(MockModel::new("not json")),
            RelaySettings {
                results_dir: tmp.path().join("model_results"),
            },
        );

        let err = backend.search("golf").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse model response");
    }
}

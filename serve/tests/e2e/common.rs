//! Shared helpers for e2e tests: spawn the server in once mode on an ephemeral
//! port with a mock model and a temp results directory.

use std::sync::Arc;

use gearfinder::{MockModel, ModelClient, RelaySettings};
use tokio::net::TcpListener;

/// Loads .env from the current directory (or project root when run via
/// `cargo test`), so e2e runs pick up local overrides.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Binds `127.0.0.1:0` and spawns the server in once mode with a [`MockModel`]
/// returning `reply`. Returns the base URL, the results dir guard (keep it alive
/// for the duration of the test), and the server handle.
pub async fn spawn_server_once(
    reply: &str,
) -> (
    String,
    tempfile::TempDir,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);

    let results = tempfile::tempdir().unwrap();
    let settings = RelaySettings {
        results_dir: results.path().join("model_results"),
    };
    let model: Arc<dyn ModelClient> = Arc::new(MockModel::new(reply));
    let server_handle = tokio::spawn(serve::run_serve_on_listener_with(
        listener, model, settings, true,
    ));
    (url, results, server_handle)
}

/// Names of the debug record files written under the test results dir.
pub fn debug_record_files(results: &tempfile::TempDir) -> Vec<std::path::PathBuf> {
    let dir = results.path().join("model_results");
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

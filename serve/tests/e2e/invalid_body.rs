use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use super::common;

#[tokio::test]
async fn e2e_malformed_body_is_a_generic_500() {
    common::load_dotenv();
    let (url, _results, server_handle) = common::spawn_server_once("{}").await;

    // Not a { "prompt": string } object; the relay collapses this to the same
    // coarse failure as any other error, not a 4xx.
    let response = reqwest::Client::new()
        .post(format!("{url}/api/recommend"))
        .header("content-type", "application/json")
        .body("this is not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to process request"}));

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

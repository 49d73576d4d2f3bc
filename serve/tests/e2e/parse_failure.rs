use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use super::common;

#[tokio::test]
async fn e2e_non_json_model_text_is_a_500_with_parse_message() {
    common::load_dotenv();
    let (url, results, server_handle) = common::spawn_server_once("not json").await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/recommend"))
        .json(&json!({"prompt": "beginner kayaking"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to parse model response"}));

    // The debug record write does not depend on the parse succeeding: the raw
    // unparsed text is still persisted.
    let files = common::debug_record_files(&results);
    assert_eq!(files.len(), 1);
    let record = std::fs::read_to_string(&files[0]).unwrap();
    assert!(record.contains("not json"));

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

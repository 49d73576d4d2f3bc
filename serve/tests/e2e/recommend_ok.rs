use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use super::common;

#[tokio::test]
async fn e2e_valid_prompt_returns_enveloped_set() {
    common::load_dotenv();
    let reply = r#"{"item1":{"name":"Kayak","description":"sit-on-top 3 m length"}}"#;
    let (url, results, server_handle) = common::spawn_server_once(reply).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/recommend"))
        .json(&json!({"prompt": "beginner kayaking"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "result": {
                "response": {
                    "item1": {"name": "Kayak", "description": "sit-on-top 3 m length"}
                }
            }
        })
    );

    // One debug record per request, holding the query and the raw text.
    let files = common::debug_record_files(&results);
    assert_eq!(files.len(), 1);
    let record = std::fs::read_to_string(&files[0]).unwrap();
    assert!(record.contains("beginner kayaking"));

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

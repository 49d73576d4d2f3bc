use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use super::common;

#[tokio::test]
async fn e2e_health_answers_ok() {
    common::load_dotenv();
    let reply = r#"{"item1":{"name":"Tent","description":"2 person 3 kg"}}"#;
    let (url, _results, server_handle) = common::spawn_server_once(reply).await;

    let client = reqwest::Client::new();
    let response = client.get(format!("{url}/health")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");

    // Once mode only exits after a relay request; send one so the server stops.
    let _ = client
        .post(format!("{url}/api/recommend"))
        .json(&json!({"prompt": "camping"}))
        .send()
        .await
        .unwrap();

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

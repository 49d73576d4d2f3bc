//! Wire types for the relay route: inbound request, success envelope, error body.
//!
//! The success payload carries the model's parsed output as raw JSON
//! (`serde_json::Value`): the relay trusts it as-is and never reshapes it
//! (`preserve_order` keeps the key order the model chose).

use serde::{Deserialize, Serialize};

/// Inbound body for `POST /api/recommend`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub prompt: String,
}

/// Success contract: `{ "result": { "response": <model output> } }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub result: ResultBody,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultBody {
    pub response: serde_json::Value,
}

impl ResponseEnvelope {
    pub fn new(response: serde_json::Value) -> Self {
        ResponseEnvelope {
            result: ResultBody { response },
        }
    }
}

/// Failure contract: `{ "error": string }` with an HTTP 500.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_wraps_value_unchanged() {
        let set = json!({"item1": {"name": "Kayak", "description": "sit-on-top 3 m length"}});
        let envelope = ResponseEnvelope::new(set.clone());
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire, json!({"result": {"response": set}}));
    }

    #[test]
    fn envelope_preserves_key_order() {
        // item10 would sort before item2 lexicographically; insertion order must win.
        let raw = r#"{"item1":{"name":"a","description":"d"},"item10":{"name":"b","description":"d"},"item2":{"name":"c","description":"d"}}"#;
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        let envelope = ResponseEnvelope::new(value);
        let out = serde_json::to_string(&envelope).unwrap();
        let i1 = out.find("item1").unwrap();
        let i10 = out.find("item10").unwrap();
        let i2 = out.find("item2").unwrap();
        assert!(i1 < i10 && i10 < i2);
    }

    #[test]
    fn request_round_trips() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"prompt":"beginner kayaking"}"#).unwrap();
        assert_eq!(req.prompt, "beginner kayaking");
    }
}

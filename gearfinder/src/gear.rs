//! Gear data model: the typed view of the model's recommendation object.
//!
//! The relay itself passes the model output through untyped; this projection is
//! for front ends that want `(key, GearItem)` pairs in the model's order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recommended piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearItem {
    pub name: String,
    pub description: String,
}

/// The recommendation object did not have the flat key→{name,description} shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("recommendation set is not a JSON object")]
    NotAnObject,
    #[error("entry {key:?} is not a gear item: {source}")]
    BadItem {
        key: String,
        source: serde_json::Error,
    },
}

/// Ordered key→[`GearItem`] mapping. Insertion order is the model's essentiality
/// order (most essential first) and is kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecommendationSet {
    entries: Vec<(String, GearItem)>,
}

impl RecommendationSet {
    /// Projects the raw envelope value (`result.response`) into typed entries,
    /// preserving key order. Shape problems are reported, not repaired.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ShapeError> {
        let object = value.as_object().ok_or(ShapeError::NotAnObject)?;
        let mut entries = Vec::with_capacity(object.len());
        for (key, item) in object {
            let item: GearItem =
                serde_json::from_value(item.clone()).map_err(|source| ShapeError::BadItem {
                    key: key.clone(),
                    source,
                })?;
            entries.push((key.clone(), item));
        }
        Ok(RecommendationSet { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GearItem)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projects_entries_in_model_order() {
        let raw = r#"{"item1":{"name":"Kayak","description":"sit-on-top 3 m length"},"item10":{"name":"Dry bag","description":"10 L roll top"},"item2":{"name":"Paddle","description":"220 cm aluminium shaft"}}"#;
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        let set = RecommendationSet::from_value(&value).unwrap();
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["item1", "item10", "item2"]);
        assert_eq!(set.len(), 3);
        let (_, first) = set.iter().next().unwrap();
        assert_eq!(first.name, "Kayak");
    }

    #[test]
    fn non_object_is_a_shape_error() {
        let err = RecommendationSet::from_value(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, ShapeError::NotAnObject));
    }

    #[test]
    fn item_missing_description_is_a_shape_error() {
        let value = json!({"item1": {"name": "Kayak"}});
        let err = RecommendationSet::from_value(&value).unwrap_err();
        match err {
            ShapeError::BadItem { key, .. } => assert_eq!(key, "item1"),
            other => panic!("expected BadItem, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_an_empty_set() {
        let set = RecommendationSet::from_value(&json!({})).unwrap();
        assert!(set.is_empty());
    }
}

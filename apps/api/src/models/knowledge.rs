use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Categories selected for a single query, keyed by category identifier.
/// Payloads are copied from the knowledge base unchanged.
pub type RelevantKnowledge = Map<String, Value>;

/// Categorized sustainability facts: category identifier → opaque JSON payload.
///
/// Payloads are never inspected; they are only re-serialized into the prompt
/// and returned verbatim from `/knowledge`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase(Map<String, Value>);

impl KnowledgeBase {
    pub fn new(categories: Map<String, Value>) -> Self {
        Self(categories)
    }

    pub fn get(&self, category: &str) -> Option<&Value> {
        self.0.get(category)
    }

    pub fn categories(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts the entries of every category: mapping payloads contribute
    /// their key count, anything else counts as one.
    pub fn total_entries(&self) -> usize {
        self.0
            .values()
            .map(|payload| match payload {
                Value::Object(entries) => entries.len(),
                _ => 1,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kb(value: Value) -> KnowledgeBase {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_total_entries_counts_mapping_keys_and_scalars_as_one() {
        let base = kb(json!({
            "reisen": { "bahn": {}, "flug": {}, "auto": {} },
            "meetings": { "virtuell": {} },
            "hinweis": "Nur intern",
            "liste": [1, 2, 3]
        }));
        assert_eq!(base.total_entries(), 3 + 1 + 1 + 1);
    }

    #[test]
    fn test_array_root_is_rejected() {
        let result: Result<KnowledgeBase, _> = serde_json::from_value(json!([1, 2]));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let base = kb(json!({ "energie": { "strom": "Ökostrom" } }));
        let value = serde_json::to_value(&base).unwrap();
        assert_eq!(value, json!({ "energie": { "strom": "Ökostrom" } }));
    }

    #[test]
    fn test_empty_base() {
        let base = KnowledgeBase::default();
        assert!(base.is_empty());
        assert_eq!(base.total_entries(), 0);
        assert!(base.categories().is_empty());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const SCORE_NOT_APPLICABLE: &str = "N/A";
pub const CO2_NOT_COMPUTABLE: &str = "Nicht berechenbar";
pub const REVIEW_PLACEHOLDER: &str = "Antwort überprüfen";

/// The answer returned to the caller under `response`.
///
/// Expected keys are `answer`, `sustainability_score`, `action_items` and
/// `co2_impact`, but nothing is validated: a parsed reply is kept exactly as the
/// model sent it, including `null` values, odd types and extra keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisoryResult(Map<String, Value>);

impl AdvisoryResult {
    /// The universal fallback: the raw reply becomes the answer verbatim and
    /// every other field carries its fixed marker.
    pub fn degraded(raw_reply: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("answer".to_string(), json!(raw_reply));
        fields.insert(
            "sustainability_score".to_string(),
            json!(SCORE_NOT_APPLICABLE),
        );
        fields.insert("action_items".to_string(), json!([REVIEW_PLACEHOLDER]));
        fields.insert("co2_impact".to_string(), json!(CO2_NOT_COMPUTABLE));
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn answer(&self) -> Option<&str> {
        self.get("answer").and_then(Value::as_str)
    }
}

/// Outcome of interpreting a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The reply was a JSON object; kept unchanged.
    Parsed(AdvisoryResult),
    /// The reply could not be parsed; built with [`AdvisoryResult::degraded`].
    Degraded(AdvisoryResult),
}

impl Advisory {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Advisory::Degraded(_))
    }

    pub fn result(&self) -> &AdvisoryResult {
        match self {
            Advisory::Parsed(result) | Advisory::Degraded(result) => result,
        }
    }

    pub fn into_result(self) -> AdvisoryResult {
        match self {
            Advisory::Parsed(result) | Advisory::Degraded(result) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_object() {
        let value = json!({ "answer": "Licht aus", "sustainability_score": 8, "quelle": null });
        let result: AdvisoryResult = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result: Result<AdvisoryResult, _> = serde_json::from_value(json!("nur Text"));
        assert!(result.is_err());
    }

    #[test]
    fn test_degraded_markers() {
        let result = AdvisoryResult::degraded("Fahr lieber Rad.");
        assert_eq!(result.answer(), Some("Fahr lieber Rad."));
        assert_eq!(result.get("sustainability_score"), Some(&json!("N/A")));
        assert_eq!(
            result.get("action_items"),
            Some(&json!(["Antwort überprüfen"]))
        );
        assert_eq!(result.get("co2_impact"), Some(&json!("Nicht berechenbar")));
    }

    #[test]
    fn test_into_result_unwraps_both_branches() {
        let parsed = Advisory::Parsed(AdvisoryResult::default());
        let degraded = Advisory::Degraded(AdvisoryResult::degraded("x"));
        assert!(!parsed.is_degraded());
        assert!(degraded.is_degraded());
        assert_eq!(degraded.into_result().answer(), Some("x"));
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /ai/extract_local`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub text: String,
}

/// Fields the extraction service pulled out of free text.
///
/// Every field is optional and kept as raw JSON: the extractor may send a
/// number or a string for `age`, the `"unknown"` sentinel, or a code the form
/// does not offer. Interpreting them is the merge's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub breathing: Option<Value>,
    #[serde(default)]
    pub conscious: Option<Value>,
    #[serde(default)]
    pub bleeding: Option<Value>,
    #[serde(default)]
    pub chest_pain: Option<Value>,
    #[serde(default)]
    pub pain_level: Option<Value>,
    #[serde(default)]
    pub vomiting: Option<Value>,
    #[serde(default)]
    pub dizziness: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_result_deserializes() {
        let result: ExtractionResult =
            serde_json::from_str(r#"{"age": 22, "breathing": "unknown", "extra": true}"#).unwrap();
        assert_eq!(result.age, Some(Value::from(22)));
        assert_eq!(result.breathing, Some(Value::from("unknown")));
        assert!(result.conscious.is_none());
        assert!(result.dizziness.is_none());
    }

    #[test]
    fn explicit_null_is_absent() {
        let result: ExtractionResult = serde_json::from_str(r#"{"vomiting": null}"#).unwrap();
        assert!(result.vomiting.is_none());
    }
}

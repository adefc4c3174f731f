use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body returned by `POST /triage`.
///
/// Every field is lenient: a missing, `null` or wrongly typed field takes its
/// default, and scalar values are read as text, so a partial or malformed
/// response never fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageResponse {
    /// Human-readable severity label; the only source of the severity tier.
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub call_now: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub call_tel: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub steps: Vec<String>,
    /// Anything other than an object reads as no summary.
    #[serde(default, deserialize_with = "object_or_none")]
    pub summary: Option<CaseSummary>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub disclaimer: Option<String>,
}

/// The service's echo of how it read the case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub breathing: Option<Value>,
    #[serde(default)]
    pub conscious: Option<Value>,
    #[serde(default)]
    pub bleeding: Option<Value>,
    #[serde(default, deserialize_with = "lenient_notes")]
    pub notes: Option<Notes>,
}

/// Notes arrive as a list, but a bare scalar is tolerated as one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Notes {
    List(Vec<String>),
    Single(String),
}

impl Notes {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::List(items) => items,
            Self::Single(item) => std::slice::from_ref(item),
        }
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub models_loaded: u32,
    #[serde(default)]
    pub models_expected: u32,
    #[serde(default)]
    pub model_errors: Vec<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_text))
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    })
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn object_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<CaseSummary>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn lenient_notes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Notes>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(Notes::List(items.into_iter().filter_map(scalar_text).collect())),
        Some(value) => scalar_text(value).map(Notes::Single),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_decodes() {
        let resp: TriageResponse = serde_json::from_str(
            r#"{
                "level": "🔴 طارئ جدًا",
                "call_now": true,
                "call_tel": "997",
                "steps": ["اتصل بالطوارئ فورًا."],
                "summary": {"age": 30, "breathing": "no", "conscious": "yes", "bleeding": "none", "notes": ["مشكلة في التنفس."]},
                "disclaimer": "هذا تقييم أولي وليس تشخيصًا طبيًا."
            }"#,
        )
        .unwrap();
        assert!(resp.call_now);
        assert_eq!(resp.call_tel.as_deref(), Some("997"));
        assert_eq!(resp.steps.len(), 1);
        let summary = resp.summary.unwrap();
        assert_eq!(summary.age, Some(Value::from(30)));
        assert_eq!(summary.notes.unwrap().as_slice().len(), 1);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let resp: TriageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, TriageResponse::default());
        assert!(!resp.call_now);
        assert!(resp.steps.is_empty());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let resp: TriageResponse = serde_json::from_str(
            r#"{"level": null, "call_now": null, "steps": null, "summary": null, "call_tel": null}"#,
        )
        .unwrap();
        assert_eq!(resp, TriageResponse::default());
    }

    #[test]
    fn single_string_note_is_one_note() {
        let summary: CaseSummary = serde_json::from_str(r#"{"notes": "دوخة."}"#).unwrap();
        assert_eq!(summary.notes.unwrap().as_slice(), ["دوخة.".to_string()]);
    }

    #[test]
    fn numeric_call_tel_reads_as_text() {
        let resp: TriageResponse = serde_json::from_str(r#"{"call_now": true, "call_tel": 997}"#).unwrap();
        assert!(resp.call_now);
        assert_eq!(resp.call_tel.as_deref(), Some("997"));
    }

    #[test]
    fn non_string_notes_are_stringified() {
        let resp: TriageResponse = serde_json::from_str(r#"{"summary": {"notes": [1, "نزيف", true, null]}}"#).unwrap();
        let notes = resp.summary.unwrap().notes.unwrap();
        assert_eq!(notes.as_slice(), ["1".to_string(), "نزيف".to_string(), "true".to_string()]);

        let summary: CaseSummary = serde_json::from_str(r#"{"notes": 3}"#).unwrap();
        assert_eq!(summary.notes, Some(Notes::Single("3".into())));
    }

    #[test]
    fn non_object_summary_is_absent() {
        let resp: TriageResponse = serde_json::from_str(r#"{"level": "🟢 منخفض", "summary": "n/a"}"#).unwrap();
        assert_eq!(resp.level.as_deref(), Some("🟢 منخفض"));
        assert!(resp.summary.is_none());

        let resp: TriageResponse = serde_json::from_str(r#"{"summary": [1, 2]}"#).unwrap();
        assert!(resp.summary.is_none());
    }

    #[test]
    fn wrongly_typed_fields_fall_back() {
        let resp: TriageResponse = serde_json::from_str(
            r#"{"level": {"tier": 1}, "call_now": 1, "steps": "اتصل", "disclaimer": []}"#,
        )
        .unwrap();
        assert!(resp.level.is_none());
        assert!(resp.call_now);
        assert!(resp.steps.is_empty());
        assert!(resp.disclaimer.is_none());

        let resp: TriageResponse = serde_json::from_str(r#"{"call_now": "", "steps": ["راقب", 2, {}]}"#).unwrap();
        assert!(!resp.call_now);
        assert_eq!(resp.steps, ["راقب".to_string(), "2".to_string()]);
    }

    #[test]
    fn health_status_ok() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status": "ok", "models_loaded": 7, "models_expected": 7, "model_errors": []}"#,
        )
        .unwrap();
        assert!(health.is_ok());
        assert_eq!(health.models_loaded, 7);
    }
}

use serde::{Deserialize, Serialize};

use super::enums::{Bleeding, Breathing, Consciousness, PainLevel, YesNo};

/// Body of `POST /triage`. Built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriagePayload {
    /// Always a finite, non-negative number; unusable input becomes 0.
    pub age: u32,
    pub breathing: Breathing,
    pub conscious: Consciousness,
    pub bleeding: Bleeding,
    pub chest_pain: YesNo,
    pub pain_level: PainLevel,
    pub vomiting: YesNo,
    pub dizziness: YesNo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_keys_and_codes() {
        let payload = TriagePayload {
            age: 7,
            breathing: Breathing::Abnormal,
            conscious: Consciousness::Yes,
            bleeding: Bleeding::None,
            chest_pain: YesNo::No,
            pain_level: PainLevel::Unknown,
            vomiting: YesNo::Yes,
            dizziness: YesNo::Unknown,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "age": 7,
                "breathing": "abnormal",
                "conscious": "yes",
                "bleeding": "none",
                "chest_pain": "no",
                "pain_level": "unknown",
                "vomiting": "yes",
                "dizziness": "unknown",
            })
        );
    }
}

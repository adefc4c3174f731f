use serde::{Deserialize, Serialize};

use super::enums::{Bleeding, Breathing, Consciousness, PainLevel, YesNo};

/// Editable case form, as the user (or the extraction merge) left it.
///
/// `age` stays raw text: it is what the input box holds, and is only
/// coerced to a number when a payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageForm {
    pub age: String,
    pub breathing: Breathing,
    pub conscious: Consciousness,
    pub bleeding: Bleeding,
    pub chest_pain: YesNo,
    pub pain_level: PainLevel,
    pub vomiting: YesNo,
    pub dizziness: YesNo,
}

impl TriageForm {
    /// Clear every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Names of the form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Age,
    Breathing,
    Conscious,
    Bleeding,
    ChestPain,
    PainLevel,
    Vomiting,
    Dizziness,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Age,
        FormField::Breathing,
        FormField::Conscious,
        FormField::Bleeding,
        FormField::ChestPain,
        FormField::PainLevel,
        FormField::Vomiting,
        FormField::Dizziness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Breathing => "breathing",
            Self::Conscious => "conscious",
            Self::Bleeding => "bleeding",
            Self::ChestPain => "chest_pain",
            Self::PainLevel => "pain_level",
            Self::Vomiting => "vomiting",
            Self::Dizziness => "dizziness",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

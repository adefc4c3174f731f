use crate::models::{TriageForm, TriagePayload};

/// Read the form into a fresh triage payload. Cannot fail.
pub fn build_payload(form: &TriageForm) -> TriagePayload {
    TriagePayload {
        age: coerce_age(&form.age),
        breathing: form.breathing,
        conscious: form.conscious,
        bleeding: form.bleeding,
        chest_pain: form.chest_pain,
        pain_level: form.pain_level,
        vomiting: form.vomiting,
        dizziness: form.dizziness,
    }
}

/// Coerce raw age text to a whole, non-negative number of years.
///
/// Blank, non-numeric, non-finite and negative input all become 0.
/// Fractions are truncated.
pub fn coerce_age(raw: &str) -> u32 {
    match parse_finite(raw) {
        Some(years) if years >= 0.0 => years.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Parse text as a finite number, ignoring surrounding whitespace.
pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

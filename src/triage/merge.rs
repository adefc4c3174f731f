//! Merge extracted fields into the form without losing what is already there.
//!
//! Per field, independently:
//! - absent or `null`: untouched
//! - `""` or `"unknown"`: untouched (a known-unknown is not information)
//! - a code the form does not offer: untouched
//! - anything else: overwrites
//!
//! `age` only overwrites when it reads as a finite number.

use std::str::FromStr;

use serde_json::Value;

use super::payload::parse_finite;
use crate::models::{ExtractionResult, FormField, TriageForm, UNKNOWN_CODE};

/// Merge `result` into `form`, returning the fields that changed value.
pub fn merge_extraction(form: &mut TriageForm, result: &ExtractionResult) -> Vec<FormField> {
    let mut changed = Vec::new();

    if let Some(age) = result.age.as_ref().and_then(extracted_age) {
        let age = format_age(age);
        if form.age != age {
            form.age = age;
            changed.push(FormField::Age);
        }
    }

    merge_choice(&mut form.breathing, &result.breathing, FormField::Breathing, &mut changed);
    merge_choice(&mut form.conscious, &result.conscious, FormField::Conscious, &mut changed);
    merge_choice(&mut form.bleeding, &result.bleeding, FormField::Bleeding, &mut changed);
    merge_choice(&mut form.chest_pain, &result.chest_pain, FormField::ChestPain, &mut changed);
    merge_choice(&mut form.pain_level, &result.pain_level, FormField::PainLevel, &mut changed);
    merge_choice(&mut form.vomiting, &result.vomiting, FormField::Vomiting, &mut changed);
    merge_choice(&mut form.dizziness, &result.dizziness, FormField::Dizziness, &mut changed);

    changed
}

fn merge_choice<T>(slot: &mut T, extracted: &Option<Value>, field: FormField, changed: &mut Vec<FormField>)
where
    T: FromStr + PartialEq,
{
    let Some(Value::String(code)) = extracted else { return };
    if code.is_empty() || code == UNKNOWN_CODE {
        return;
    }
    match code.parse::<T>() {
        Ok(value) => {
            if *slot != value {
                *slot = value;
                changed.push(field);
            }
        }
        Err(_) => {
            tracing::debug!(%field, code = %code, "Ignoring extracted code the form does not offer");
        }
    }
}

fn extracted_age(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_finite(s),
        _ => None,
    }
}

fn format_age(age: f64) -> String {
    if age.fract() == 0.0 && age.abs() < 1e15 {
        format!("{}", age as i64)
    } else {
        age.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bleeding, Breathing, Consciousness, PainLevel, YesNo};
    use serde_json::json;

    fn extraction(value: serde_json::Value) -> ExtractionResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn unknown_does_not_clobber_known() {
        let mut form = TriageForm { breathing: Breathing::Yes, ..Default::default() };
        let changed = merge_extraction(&mut form, &extraction(json!({"breathing": "unknown"})));
        assert_eq!(form.breathing, Breathing::Yes);
        assert!(changed.is_empty());
    }

    #[test]
    fn known_value_overwrites() {
        let mut form = TriageForm { breathing: Breathing::Yes, ..Default::default() };
        let changed = merge_extraction(&mut form, &extraction(json!({"breathing": "no"})));
        assert_eq!(form.breathing, Breathing::No);
        assert_eq!(changed, vec![FormField::Breathing]);
    }

    #[test]
    fn merge_is_idempotent() {
        let result = extraction(json!({"age": 40, "bleeding": "mild", "vomiting": "yes"}));
        let mut form = TriageForm::default();
        merge_extraction(&mut form, &result);
        let once = form.clone();
        let changed = merge_extraction(&mut form, &result);
        assert_eq!(form, once);
        assert!(changed.is_empty());
    }

    #[test]
    fn empty_and_absent_values_leave_form_alone() {
        let mut form = TriageForm {
            conscious: Consciousness::No,
            pain_level: PainLevel::Severe,
            dizziness: YesNo::Yes,
            ..Default::default()
        };
        let before = form.clone();
        merge_extraction(&mut form, &extraction(json!({"conscious": "", "pain_level": null})));
        assert_eq!(form, before);
    }

    #[test]
    fn unrecognised_code_leaves_form_alone() {
        let mut form = TriageForm { bleeding: Bleeding::Mild, ..Default::default() };
        merge_extraction(&mut form, &extraction(json!({"bleeding": "gushing", "chest_pain": true})));
        assert_eq!(form.bleeding, Bleeding::Mild);
        assert_eq!(form.chest_pain, YesNo::Unknown);
    }

    #[test]
    fn fields_merge_independently() {
        let mut form = TriageForm { breathing: Breathing::Yes, ..Default::default() };
        let changed = merge_extraction(
            &mut form,
            &extraction(json!({
                "breathing": "unknown",
                "conscious": "yes",
                "bleeding": "none",
                "chest_pain": "no",
                "pain_level": "mild",
                "vomiting": "no",
                "dizziness": "yes",
            })),
        );
        assert_eq!(form.breathing, Breathing::Yes);
        assert_eq!(form.conscious, Consciousness::Yes);
        assert_eq!(form.bleeding, Bleeding::None);
        assert_eq!(form.chest_pain, YesNo::No);
        assert_eq!(form.pain_level, PainLevel::Mild);
        assert_eq!(form.vomiting, YesNo::No);
        assert_eq!(form.dizziness, YesNo::Yes);
        assert_eq!(changed.len(), 6);
        assert!(!changed.contains(&FormField::Breathing));
    }

    #[test]
    fn numeric_age_overwrites() {
        let mut form = TriageForm { age: "30".into(), ..Default::default() };
        merge_extraction(&mut form, &extraction(json!({"age": 22})));
        assert_eq!(form.age, "22");
    }

    #[test]
    fn numeric_string_age_overwrites() {
        let mut form = TriageForm::default();
        merge_extraction(&mut form, &extraction(json!({"age": " 5 "})));
        assert_eq!(form.age, "5");
        merge_extraction(&mut form, &extraction(json!({"age": "2.5"})));
        assert_eq!(form.age, "2.5");
    }

    #[test]
    fn non_numeric_age_is_ignored() {
        let mut form = TriageForm { age: "30".into(), ..Default::default() };
        for age in [json!("unknown"), json!(""), json!("ثلاثين"), json!("inf"), json!(true), json!(null)] {
            merge_extraction(&mut form, &extraction(json!({ "age": age })));
            assert_eq!(form.age, "30");
        }
    }
}

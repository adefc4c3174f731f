use serde_json::Value;

use super::messages::{self, Language, DASH, EM_DASH};
use crate::models::CaseSummary;

/// Render the service's case recap as fixed-order, newline-separated lines.
///
/// Never fails: an absent summary, or any absent or unrecognised value in
/// it, renders as "-"; an empty or absent note list renders as "—".
pub fn format_summary(summary: Option<&CaseSummary>, lang: Language) -> String {
    let empty = CaseSummary::default();
    let s = summary.unwrap_or(&empty);

    let notes: Vec<&str> = s
        .notes
        .as_ref()
        .map(|n| n.as_slice().iter().map(String::as_str).collect())
        .unwrap_or_default();
    let notes = if notes.is_empty() {
        EM_DASH.to_string()
    } else {
        notes.join(messages::text(messages::LIST_SEPARATOR, lang))
    };

    [
        line(messages::SUMMARY_AGE, &display_age(s.age.as_ref()), lang),
        line(messages::SUMMARY_BREATHING, breathing_phrase(s.breathing.as_ref(), lang), lang),
        line(messages::SUMMARY_CONSCIOUS, yes_no_phrase(s.conscious.as_ref(), lang), lang),
        line(messages::SUMMARY_BLEEDING, bleeding_phrase(s.bleeding.as_ref(), lang), lang),
        line(messages::SUMMARY_NOTES, &notes, lang),
    ]
    .join("\n")
}

fn line(label_key: &str, value: &str, lang: Language) -> String {
    format!("{}: {value}", messages::text(label_key, lang))
}

fn display_age(age: Option<&Value>) -> String {
    match age {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => DASH.to_string(),
    }
}

fn code(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn breathing_phrase(value: Option<&Value>, lang: Language) -> &'static str {
    match code(value) {
        Some("yes") => messages::text(messages::VALUE_YES, lang),
        Some("no") => messages::text(messages::VALUE_NO, lang),
        Some("abnormal") => messages::text(messages::VALUE_ABNORMAL, lang),
        _ => DASH,
    }
}

fn yes_no_phrase(value: Option<&Value>, lang: Language) -> &'static str {
    match code(value) {
        Some("yes") => messages::text(messages::VALUE_YES, lang),
        Some("no") => messages::text(messages::VALUE_NO, lang),
        _ => DASH,
    }
}

fn bleeding_phrase(value: Option<&Value>, lang: Language) -> &'static str {
    match code(value) {
        Some("none") => messages::text(messages::VALUE_BLEEDING_NONE, lang),
        Some("mild") => messages::text(messages::VALUE_BLEEDING_MILD, lang),
        Some("severe") => messages::text(messages::VALUE_BLEEDING_SEVERE, lang),
        _ => DASH,
    }
}

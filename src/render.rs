//! Terminal rendering of a display state. The only place that turns
//! `UiState` into output.

use std::fmt::Write as _;

use crate::session::Notice;
use crate::triage::{Theme, UiState};

/// Render the result card as plain text lines.
pub fn render_text(ui: &UiState) -> String {
    let mut out = String::new();
    if !ui.visible {
        return out;
    }

    let _ = writeln!(out, "[{}] {}", theme_tag(ui.theme), ui.badge);
    let _ = writeln!(out, "{}", ui.hint);
    let _ = writeln!(out);

    let marker = if ui.is_emergency() { "!!" } else { "=>" };
    let _ = writeln!(out, "{marker} {}  [{}]", ui.primary.headline, ui.primary.label);

    if ui.call.visible {
        let _ = writeln!(out, "   {} <{}>", ui.call.label, ui.call.tel_href);
    }

    if !ui.steps.is_empty() {
        let _ = writeln!(out);
        for (i, step) in ui.steps.iter().enumerate() {
            let _ = writeln!(out, "{:>2}. {step}", i + 1);
        }
    }

    if !ui.summary.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", ui.summary);
    }

    if !ui.disclaimer.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", ui.disclaimer);
    }

    out
}

pub fn render_notice(notice: &Notice) -> String {
    format!("{}\n", notice.message)
}

fn theme_tag(theme: Theme) -> String {
    theme.as_str().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TriageResponse;
    use crate::session::NoticeKind;
    use crate::triage::Presentation;

    #[test]
    fn hidden_card_renders_nothing() {
        assert!(render_text(&UiState::initial(&Presentation::default())).is_empty());
    }

    #[test]
    fn emergency_card_shows_call_and_steps() {
        let resp = TriageResponse {
            level: Some("🔴 طارئ جدًا".into()),
            call_now: true,
            call_tel: Some("997".into()),
            steps: vec!["اتصل بالطوارئ فورًا.".into(), "راقب التنفس.".into()],
            summary: None,
            disclaimer: Some("هذا تقييم أولي وليس تشخيصًا طبيًا.".into()),
        };
        let text = render_text(&UiState::from_response(&resp, &Presentation::default()));

        assert!(text.starts_with("[RED] 🔴 طارئ جدًا\n"));
        assert!(text.contains("!! اتصل بالإسعاف الآن ولا تنتظر.  [اتصل الآن]"));
        assert!(text.contains("اتصل على 997 <tel:997>"));
        assert!(text.contains(" 1. اتصل بالطوارئ فورًا.\n 2. راقب التنفس.\n"));
        assert!(text.contains("العمر: -"));
        assert!(text.trim_end().ends_with("هذا تقييم أولي وليس تشخيصًا طبيًا."));
    }

    #[test]
    fn routine_card_hides_call() {
        let resp = TriageResponse {
            level: Some("🟢 بسيط".into()),
            steps: vec!["إسعاف منزلي ومتابعة.".into()],
            ..Default::default()
        };
        let text = render_text(&UiState::from_response(&resp, &Presentation::default()));
        assert!(text.starts_with("[GREEN]"));
        assert!(text.contains("=> إسعاف منزلي ومتابعة."));
        assert!(!text.contains("tel:"));
    }

    #[test]
    fn notice_is_its_message() {
        let notice = Notice { kind: NoticeKind::Remote, message: "HTTP 500 - boom".into() };
        assert_eq!(render_notice(&notice), "HTTP 500 - boom\n");
    }
}

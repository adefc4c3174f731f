//! Display state derived from one triage response.
//!
//! `UiState::from_response` is a pure function of the response: every render
//! replaces the previous state wholesale, nothing is patched in place.

use serde::{Deserialize, Serialize};

use super::call::{call_disclosure, CallDisclosure};
use super::messages::{self, Language, EM_DASH};
use super::primary_action::{select_primary_action, ActionState, ActionTarget, PrimaryAction};
use super::severity::{classify, Severity, Theme};
use super::summary::format_summary;
use crate::config::{ClientConfig, FALLBACK_EMERGENCY_NUMBER};
use crate::models::TriageResponse;

/// Fixed inputs of every render that do not come from the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub language: Language,
    pub emergency_number: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            language: Language::default(),
            emergency_number: FALLBACK_EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl From<&ClientConfig> for Presentation {
    fn from(config: &ClientConfig) -> Self {
        Self {
            language: config.language,
            emergency_number: config.emergency_number.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Whether the result card is shown at all.
    pub visible: bool,
    /// The level label verbatim.
    pub badge: String,
    pub theme: Theme,
    pub hint: String,
    pub primary: PrimaryAction,
    pub call: CallDisclosure,
    pub steps: Vec<String>,
    pub summary: String,
    pub disclaimer: String,
}

impl UiState {
    /// State before any result, and after reset.
    pub fn initial(presentation: &Presentation) -> Self {
        let lang = presentation.language;
        Self {
            visible: false,
            badge: EM_DASH.to_string(),
            theme: Theme::Neutral,
            hint: EM_DASH.to_string(),
            primary: PrimaryAction::placeholder(lang),
            call: CallDisclosure::hidden(&presentation.emergency_number, lang),
            steps: Vec::new(),
            summary: String::new(),
            disclaimer: String::new(),
        }
    }

    pub fn from_response(resp: &TriageResponse, presentation: &Presentation) -> Self {
        let lang = presentation.language;
        let level = resp.level.as_deref();

        Self {
            visible: true,
            badge: level
                .filter(|l| !l.is_empty())
                .unwrap_or(EM_DASH)
                .to_string(),
            theme: classify(level, resp.call_now).into(),
            hint: status_hint(level, resp.call_now, lang).to_string(),
            primary: select_primary_action(&resp.steps, level, resp.call_now, lang),
            call: call_disclosure(
                resp.call_now,
                resp.call_tel.as_deref(),
                &presentation.emergency_number,
                lang,
            ),
            steps: resp.steps.clone(),
            summary: format_summary(resp.summary.as_ref(), lang),
            disclaimer: resp.disclaimer.clone().unwrap_or_default(),
        }
    }

    /// Apply the primary action and return its target.
    ///
    /// Revealing the call shows whatever number the disclosure holds; for a
    /// response without `call_now` that is the fallback.
    pub fn activate_primary(&mut self) -> ActionTarget {
        if self.primary.target == ActionTarget::RevealCall {
            self.call.visible = true;
        }
        self.primary.target
    }

    pub fn is_emergency(&self) -> bool {
        self.primary.state == ActionState::Emergency
    }
}

/// One-line guidance above the result, same priority as the primary action.
pub fn status_hint(level: Option<&str>, call_now: bool, lang: Language) -> &'static str {
    let key = match classify(level, call_now) {
        Some(Severity::Red) => messages::HINT_EMERGENCY,
        Some(Severity::Yellow) => messages::HINT_CAUTION,
        Some(Severity::Green) => messages::HINT_REASSURING,
        None => messages::HINT_DEFAULT,
    };
    messages::text(key, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation() -> Presentation {
        Presentation::default()
    }

    fn response(level: &str, call_now: bool, call_tel: Option<&str>, steps: &[&str]) -> TriageResponse {
        TriageResponse {
            level: Some(level.to_string()),
            call_now,
            call_tel: call_tel.map(String::from),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            summary: None,
            disclaimer: Some("هذا تقييم أولي وليس تشخيصًا طبيًا.".into()),
        }
    }

    #[test]
    fn red_call_now_scenario() {
        let resp = response("🔴 عالي", true, Some("997"), &["ضع المريض بوضعية الإنعاش"]);
        let ui = UiState::from_response(&resp, &presentation());
        assert_eq!(ui.theme, Theme::Red);
        assert!(ui.call.visible);
        assert_eq!(ui.call.tel_href, "tel:997");
        assert_eq!(ui.primary.headline, "اتصل بالإسعاف الآن ولا تنتظر.");
        assert_ne!(ui.primary.headline, "ضع المريض بوضعية الإنعاش");
        assert_eq!(ui.steps, vec!["ضع المريض بوضعية الإنعاش".to_string()]);
        assert_eq!(ui.hint, messages::text(messages::HINT_EMERGENCY, Language::Arabic));
        assert!(ui.is_emergency());
    }

    #[test]
    fn yellow_no_steps_scenario() {
        let resp = response("🟡 متوسط", false, None, &[]);
        let ui = UiState::from_response(&resp, &presentation());
        assert_eq!(ui.theme, Theme::Yellow);
        assert_eq!(ui.primary.headline, "راقب الأعراض واطلب مساعدة إذا ساءت الحالة.");
        assert!(!ui.call.visible);
        assert_eq!(ui.hint, messages::text(messages::HINT_CAUTION, Language::Arabic));
    }

    #[test]
    fn green_with_step_scenario() {
        let resp = response("🟢 منخفض", false, Some("997"), &["راقب الحالة"]);
        let ui = UiState::from_response(&resp, &presentation());
        assert_eq!(ui.theme, Theme::Green);
        assert_eq!(ui.primary.headline, "راقب الحالة");
        assert!(!ui.call.visible);
        assert_eq!(ui.call.tel_href, "tel:911");
        assert_eq!(ui.call.label, "اتصل على 911");
        assert_eq!(ui.hint, messages::text(messages::HINT_REASSURING, Language::Arabic));
    }

    #[test]
    fn render_is_a_pure_function_of_the_response() {
        let first = response("🔴 عالي", true, Some("997"), &["a"]);
        let second = response("🟢 منخفض", false, None, &["b"]);
        let p = presentation();

        let _ = UiState::from_response(&first, &p);
        let after_second = UiState::from_response(&second, &p);
        assert_eq!(after_second, UiState::from_response(&second, &p));
        assert_eq!(after_second.call.tel_href, "tel:911");
    }

    #[test]
    fn empty_response_degrades_gracefully() {
        let ui = UiState::from_response(&TriageResponse::default(), &presentation());
        assert!(ui.visible);
        assert_eq!(ui.badge, "—");
        assert_eq!(ui.theme, Theme::Neutral);
        assert_eq!(ui.primary.headline, "—");
        assert!(ui.steps.is_empty());
        assert!(ui.disclaimer.is_empty());
        assert!(ui.summary.ends_with("ملاحظات: —"));
        assert_eq!(ui.hint, messages::text(messages::HINT_DEFAULT, Language::Arabic));
    }

    #[test]
    fn initial_state_is_placeholder() {
        let ui = UiState::initial(&presentation());
        assert!(!ui.visible);
        assert_eq!(ui.badge, "—");
        assert_eq!(ui.hint, "—");
        assert!(ui.steps.is_empty());
        assert!(!ui.call.visible);
        assert_eq!(ui.primary, PrimaryAction::placeholder(Language::Arabic));
    }

    #[test]
    fn activating_emergency_reveals_fallback_call() {
        // red label without call_now: disclosure hidden, holds the fallback
        let resp = response("🔴 عالي", false, Some("997"), &[]);
        let mut ui = UiState::from_response(&resp, &presentation());
        assert!(!ui.call.visible);
        assert_eq!(ui.activate_primary(), ActionTarget::RevealCall);
        assert!(ui.call.visible);
        assert_eq!(ui.call.tel_href, "tel:911");
    }

    #[test]
    fn activating_scroll_changes_nothing() {
        let resp = response("🟡 متوسط", false, None, &["x"]);
        let mut ui = UiState::from_response(&resp, &presentation());
        let before = ui.clone();
        assert_eq!(ui.activate_primary(), ActionTarget::ScrollToSteps);
        assert_eq!(ui, before);
    }

    #[test]
    fn configured_fallback_number_is_used() {
        let p = Presentation { language: Language::English, emergency_number: "112".into() };
        let ui = UiState::from_response(&response("🟢", false, None, &[]), &p);
        assert_eq!(ui.call.tel_href, "tel:112");
        assert_eq!(ui.call.label, "Call 112");
    }
}

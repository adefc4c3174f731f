//! The single "most important action right now".
//!
//! Three mutually exclusive states, first match wins:
//! 1. Emergency: `call_now` or a red marker. Fixed call-now headline, steps
//!    ignored; the action reveals the call disclosure.
//! 2. Caution: yellow marker. First step, else a fixed monitoring fallback;
//!    the action scrolls to the steps.
//! 3. Routine: everything else. First step, else an em-dash; the action
//!    scrolls to the steps.

use serde::{Deserialize, Serialize};

use super::messages::{self, Language, EM_DASH};
use super::severity::{marker_severity, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionState {
    Emergency,
    Caution,
    Routine,
}

/// What activating the primary action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionTarget {
    RevealCall,
    #[default]
    ScrollToSteps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAction {
    pub state: ActionState,
    /// The instruction shown as the headline.
    pub headline: String,
    /// Button text.
    pub label: String,
    pub target: ActionTarget,
}

impl PrimaryAction {
    /// Placeholder shown before any result, and after reset.
    pub fn placeholder(lang: Language) -> Self {
        Self {
            state: ActionState::Routine,
            headline: EM_DASH.to_string(),
            label: messages::text(messages::PRIMARY_ROUTINE_LABEL, lang).to_string(),
            target: ActionTarget::ScrollToSteps,
        }
    }
}

pub fn select_state(level: Option<&str>, call_now: bool) -> ActionState {
    if call_now {
        return ActionState::Emergency;
    }
    match level.and_then(marker_severity) {
        Some(Severity::Red) => ActionState::Emergency,
        Some(Severity::Yellow) => ActionState::Caution,
        Some(Severity::Green) | None => ActionState::Routine,
    }
}

pub fn select_primary_action(
    steps: &[String],
    level: Option<&str>,
    call_now: bool,
    lang: Language,
) -> PrimaryAction {
    let first_step = steps.first().filter(|s| !s.trim().is_empty());

    match select_state(level, call_now) {
        ActionState::Emergency => PrimaryAction {
            state: ActionState::Emergency,
            headline: messages::text(messages::PRIMARY_EMERGENCY_HEADLINE, lang).to_string(),
            label: messages::text(messages::PRIMARY_EMERGENCY_LABEL, lang).to_string(),
            target: ActionTarget::RevealCall,
        },
        ActionState::Caution => PrimaryAction {
            state: ActionState::Caution,
            headline: first_step
                .cloned()
                .unwrap_or_else(|| messages::text(messages::PRIMARY_CAUTION_FALLBACK, lang).to_string()),
            label: messages::text(messages::PRIMARY_CAUTION_LABEL, lang).to_string(),
            target: ActionTarget::ScrollToSteps,
        },
        ActionState::Routine => PrimaryAction {
            state: ActionState::Routine,
            headline: first_step.cloned().unwrap_or_else(|| EM_DASH.to_string()),
            label: messages::text(messages::PRIMARY_ROUTINE_LABEL, lang).to_string(),
            target: ActionTarget::ScrollToSteps,
        },
    }
}

//! One user's triage screen: the form, the rendered result, and the two
//! flows that reach the service.
//!
//! - Direct submission: form → classification → render.
//! - Assisted submission: free text → extraction → merge into form →
//!   classification → render. The legs are strictly sequential.
//!
//! Flows are cooperative and may overlap (each only disables its own
//! trigger). Every flow takes a generation from the request fence when it
//! starts. Its response is rendered only if no newer response has rendered
//! and no reset came in between; an assisted flow also drops its extraction
//! on the same condition. The state lock is never held across an await.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::{ClientError, TriageService};
use crate::models::{HealthStatus, TriageForm, TriagePayload, TriageResponse};
use crate::triage::messages::{self, Language};
use crate::triage::{
    build_payload, merge_extraction, ActionTarget, Generation, Presentation, RequestFence, UiState,
};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Trigger controls and the assisted-flow status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub submit_busy: bool,
    pub submit_label: String,
    pub assist_busy: bool,
    pub assist_status: String,
}

impl Controls {
    fn idle(lang: Language) -> Self {
        Self {
            submit_busy: false,
            submit_label: messages::text(messages::SUBMIT_IDLE, lang).to_string(),
            assist_busy: false,
            assist_status: String::new(),
        }
    }

    fn set_submit_busy(&mut self, busy: bool, lang: Language) {
        self.submit_busy = busy;
        let key = if busy { messages::SUBMIT_BUSY } else { messages::SUBMIT_IDLE };
        self.submit_label = messages::text(key, lang).to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Rejected locally, nothing was sent.
    Validation,
    /// The service failed or could not be reached.
    Remote,
}

/// A blocking, user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn validation(message: &str) -> Self {
        Self { kind: NoticeKind::Validation, message: message.to_string() }
    }

    fn remote(prefix: &str, separator: &str, error: &ClientError) -> Self {
        Self {
            kind: NoticeKind::Remote,
            message: format!("{prefix}{separator}{error}"),
        }
    }
}

/// How a flow ended.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The response replaced the displayed result.
    Rendered,
    /// A later request or a reset superseded the response; it was dropped.
    Superseded,
    /// The flow's trigger was already busy; nothing happened.
    Busy,
    /// Rejected before any network call.
    Rejected(Notice),
    /// The service call failed; the displayed result is unchanged.
    Failed(Notice),
}

impl FlowOutcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Rejected(notice) | Self::Failed(notice) => Some(notice),
            _ => None,
        }
    }
}

struct SessionState {
    form: TriageForm,
    ui: UiState,
    controls: Controls,
}

// ═══════════════════════════════════════════════════════════
// TriageSession
// ═══════════════════════════════════════════════════════════

pub struct TriageSession<S> {
    service: S,
    presentation: Presentation,
    fence: RequestFence,
    state: Mutex<SessionState>,
}

impl<S: TriageService> TriageSession<S> {
    pub fn new(service: S, presentation: Presentation) -> Self {
        let state = SessionState {
            form: TriageForm::default(),
            ui: UiState::initial(&presentation),
            controls: Controls::idle(presentation.language),
        };
        Self {
            service,
            presentation,
            fence: RequestFence::new(),
            state: Mutex::new(state),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn form(&self) -> TriageForm {
        self.state().form.clone()
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut TriageForm)) {
        edit(&mut self.state().form);
    }

    pub fn ui(&self) -> UiState {
        self.state().ui.clone()
    }

    pub fn controls(&self) -> Controls {
        self.state().controls.clone()
    }

    /// Activate the displayed primary action.
    pub fn activate_primary(&self) -> ActionTarget {
        self.state().ui.activate_primary()
    }

    /// Clear the form and every piece of derived display state at once.
    ///
    /// Responses still in flight are superseded and will not render.
    pub fn reset(&self) {
        let mut state = self.state();
        self.fence.invalidate();
        state.form.reset();
        state.ui = UiState::initial(&self.presentation);
        state.controls.assist_status.clear();
        tracing::info!("Triage screen reset");
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.service.health().await
    }

    // ── Direct submission ───────────────────────────────────

    /// Classify the form as it stands and render the verdict.
    pub async fn submit(&self) -> FlowOutcome {
        let lang = self.presentation.language;
        let flow_id = Uuid::new_v4();

        let (payload, generation) = {
            let mut state = self.state();
            if state.controls.submit_busy {
                return FlowOutcome::Busy;
            }
            state.controls.set_submit_busy(true, lang);
            (build_payload(&state.form), self.fence.issue())
        };

        let outcome = match self.classify_and_render(&payload, generation, flow_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(%flow_id, error = %e, "Triage submission failed");
                FlowOutcome::Failed(Notice::remote(
                    messages::text(messages::NOTICE_SUBMIT_FAILED, lang),
                    "\n\n",
                    &e,
                ))
            }
        };

        self.state().controls.set_submit_busy(false, lang);
        outcome
    }

    // ── Assisted submission ─────────────────────────────────

    /// Pre-fill the form from free text, then classify and render.
    ///
    /// Blank text is rejected before any call. Classification is only issued
    /// once extraction has succeeded and been merged.
    pub async fn submit_assisted(&self, text: &str) -> FlowOutcome {
        let lang = self.presentation.language;
        let text = text.trim();
        if text.is_empty() {
            return FlowOutcome::Rejected(Notice::validation(messages::text(
                messages::NOTICE_EMPTY_TEXT,
                lang,
            )));
        }

        let flow_id = Uuid::new_v4();
        let generation = {
            let mut state = self.state();
            if state.controls.assist_busy {
                return FlowOutcome::Busy;
            }
            state.controls.assist_busy = true;
            state.controls.assist_status = messages::text(messages::ASSIST_ANALYZING, lang).to_string();
            self.fence.issue()
        };

        let outcome = match self.extract_merge_classify(text, generation, flow_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(%flow_id, error = %e, "Assisted triage failed");
                FlowOutcome::Failed(Notice::remote(
                    messages::text(messages::NOTICE_ASSIST_FAILED, lang),
                    "\n",
                    &e,
                ))
            }
        };

        let mut state = self.state();
        state.controls.assist_busy = false;
        state.controls.assist_status.clear();
        outcome
    }

    async fn extract_merge_classify(
        &self,
        text: &str,
        generation: Generation,
        flow_id: Uuid,
    ) -> Result<FlowOutcome, ClientError> {
        tracing::info!(%flow_id, chars = text.chars().count(), "Requesting field extraction");
        let extraction = self.service.extract(text).await?;

        let payload = {
            let mut state = self.state();
            if !self.fence.is_current(generation) {
                tracing::debug!(%flow_id, %generation, "Dropping superseded extraction");
                return Ok(FlowOutcome::Superseded);
            }
            let changed = merge_extraction(&mut state.form, &extraction);
            tracing::debug!(%flow_id, fields = ?changed, "Merged extracted fields into form");
            state.controls.assist_status =
                messages::text(messages::ASSIST_EVALUATING, self.presentation.language).to_string();
            build_payload(&state.form)
        };

        self.classify_and_render(&payload, generation, flow_id).await
    }

    // ── Shared ──────────────────────────────────────────────

    async fn classify_and_render(
        &self,
        payload: &TriagePayload,
        generation: Generation,
        flow_id: Uuid,
    ) -> Result<FlowOutcome, ClientError> {
        tracing::info!(%flow_id, %generation, age = payload.age, "Requesting triage classification");

        let response = self.service.classify(payload).await?;
        Ok(self.render(&response, generation, flow_id))
    }

    fn render(&self, response: &TriageResponse, generation: Generation, flow_id: Uuid) -> FlowOutcome {
        let ui = UiState::from_response(response, &self.presentation);

        let mut state = self.state();
        if !self.fence.commit(generation) {
            tracing::debug!(%flow_id, %generation, "Dropping superseded triage response");
            return FlowOutcome::Superseded;
        }

        tracing::info!(
            %flow_id,
            %generation,
            theme = ui.theme.as_str(),
            call_visible = ui.call.visible,
            steps = ui.steps.len(),
            "Rendered triage result"
        );
        state.ui = ui;
        FlowOutcome::Rendered
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

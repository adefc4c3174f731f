//! Transport to the triage service: classification, extraction and health.
//!
//! Both POST calls share one contract: JSON body out, JSON body back on
//! success, and any non-2xx status is a uniform failure carrying the response
//! body as diagnostic detail.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;

use crate::config::ClientConfig;
use crate::models::{ExtractionRequest, ExtractionResult, HealthStatus, TriagePayload, TriageResponse};

pub const TRIAGE_PATH: &str = "/triage";
pub const EXTRACT_PATH: &str = "/ai/extract_local";
pub const HEALTH_PATH: &str = "/health";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Triage service is not reachable at {0}")]
    Connection(String),

    #[error("HTTP {status} - {}", status_detail(.body))]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Transport(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Free text is empty")]
    EmptyText,
}

fn status_detail(body: &str) -> &str {
    if body.is_empty() {
        "Request failed"
    } else {
        body
    }
}

/// Remote triage collaborator (allows mocking).
#[allow(async_fn_in_trait)]
pub trait TriageService {
    /// `POST /triage`
    async fn classify(&self, payload: &TriagePayload) -> Result<TriageResponse, ClientError>;

    /// `POST /ai/extract_local`. Rejects blank text without a network call.
    async fn extract(&self, text: &str) -> Result<ExtractionResult, ClientError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}

// ═══════════════════════════════════════════════════════════
// HTTP client
// ═══════════════════════════════════════════════════════════

/// reqwest-backed client for the triage service.
pub struct HttpTriageClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTriageClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else {
            ClientError::Transport(e.to_string())
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::read_json(response).await
    }

    async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ResponseParsing(e.to_string()))
    }
}

impl TriageService for HttpTriageClient {
    async fn classify(&self, payload: &TriagePayload) -> Result<TriageResponse, ClientError> {
        self.post_json(TRIAGE_PATH, payload).await
    }

    async fn extract(&self, text: &str) -> Result<ExtractionResult, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::EmptyText);
        }
        let body = ExtractionRequest { text: text.to_string() };
        self.post_json(EXTRACT_PATH, &body).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.url(HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::read_json(response).await
    }
}

// ═══════════════════════════════════════════════════════════
// Mock
// ═══════════════════════════════════════════════════════════

/// A scripted reply, optionally held back until a gate opens.
pub enum MockReply<T> {
    Ready(Result<T, ClientError>),
    Gated(oneshot::Receiver<()>, Result<T, ClientError>),
}

/// A call the mock received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Classify(TriagePayload),
    Extract(String),
    Health,
}

/// Mock triage service for testing: replays scripted replies in order.
///
/// A call with no scripted reply left fails with a transport error.
#[derive(Default)]
pub struct MockTriageService {
    classify_replies: Mutex<VecDeque<MockReply<TriageResponse>>>,
    extract_replies: Mutex<VecDeque<MockReply<ExtractionResult>>>,
    health: Mutex<Option<HealthStatus>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockTriageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classification(self, response: TriageResponse) -> Self {
        self.push_classify(MockReply::Ready(Ok(response)));
        self
    }

    pub fn with_classification_error(self, error: ClientError) -> Self {
        self.push_classify(MockReply::Ready(Err(error)));
        self
    }

    pub fn with_extraction(self, result: ExtractionResult) -> Self {
        self.push_extract(MockReply::Ready(Ok(result)));
        self
    }

    pub fn with_extraction_error(self, error: ClientError) -> Self {
        self.push_extract(MockReply::Ready(Err(error)));
        self
    }

    pub fn with_health(self, status: HealthStatus) -> Self {
        *lock(&self.health) = Some(status);
        self
    }

    pub fn push_classify(&self, reply: MockReply<TriageResponse>) {
        lock(&self.classify_replies).push_back(reply);
    }

    pub fn push_extract(&self, reply: MockReply<ExtractionResult>) {
        lock(&self.extract_replies).push_back(reply);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: MockCall) {
        lock(&self.calls).push(call);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn resolve<T>(reply: Option<MockReply<T>>) -> Result<T, ClientError> {
    match reply {
        Some(MockReply::Ready(result)) => result,
        Some(MockReply::Gated(gate, result)) => {
            let _ = gate.await;
            result
        }
        None => Err(ClientError::Transport("no scripted reply".into())),
    }
}

impl TriageService for MockTriageService {
    async fn classify(&self, payload: &TriagePayload) -> Result<TriageResponse, ClientError> {
        self.record(MockCall::Classify(payload.clone()));
        let reply = lock(&self.classify_replies).pop_front();
        resolve(reply).await
    }

    async fn extract(&self, text: &str) -> Result<ExtractionResult, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyText);
        }
        self.record(MockCall::Extract(text.to_string()));
        let reply = lock(&self.extract_replies).pop_front();
        resolve(reply).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.record(MockCall::Health);
        lock(&self.health)
            .clone()
            .ok_or_else(|| ClientError::Transport("no scripted health".into()))
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

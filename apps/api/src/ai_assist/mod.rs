//! AI-Assist Client: asks the remote generation service to write or improve
//! one section's text.
//!
//! # Outcome policy
//! - 2xx with a usable `data.result` → returned verbatim.
//! - Transport failure → retried per `RetryPolicy` (linear backoff), then fallback.
//! - HTTP 503 → deterministic local fallback, no retry.
//! - Any other non-2xx → `AssistError::Rejected` with the service's message.
//! - 2xx without a usable result → `AssistError::MalformedResponse`. Never faked.
//!
//! Calls are independent and may race; callers merge results with a
//! whole-section replace, so the last write for a section wins.

pub mod fallback;
pub mod merge;
pub mod policy;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use crate::document::{ExperienceEntry, PersonalInfo};
use crate::i18n::Language;
use crate::remote::{RemoteApi, RemoteResponse, GENERATE_PATH};

pub use merge::merge_skill_suggestions;
pub use policy::RetryPolicy;

const SERVICE_UNAVAILABLE: u16 = 503;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistKind {
    Summary,
    Description,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistSource {
    Service,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistOutcome {
    pub text: String,
    pub source: AssistSource,
    /// Requests issued, including the one that produced the outcome.
    pub attempts: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Generation service returned no usable result")]
    MalformedResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Payloads
// ────────────────────────────────────────────────────────────────────────────

/// A section-specific generation payload. The implementing type fixes the
/// request `kind` and the local fallback used when the service is unavailable.
pub trait AssistInput: Serialize + Send + Sync {
    const KIND: AssistKind;

    fn fallback(&self, language: Language) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInput {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    /// Existing summary to improve; empty asks for a fresh one.
    pub current_summary: String,
}

impl AssistInput for SummaryInput {
    const KIND: AssistKind = AssistKind::Summary;

    fn fallback(&self, language: Language) -> String {
        fallback::summary(&self.personal_info, language)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionInput {
    pub title: String,
    pub company: String,
    pub description: String,
}

impl AssistInput for DescriptionInput {
    const KIND: AssistKind = AssistKind::Description;

    fn fallback(&self, language: Language) -> String {
        fallback::description(&self.description, language)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsInput {
    pub job_title: String,
    pub experience: Vec<ExperienceEntry>,
    pub existing_skills: Vec<String>,
}

impl AssistInput for SkillsInput {
    const KIND: AssistKind = AssistKind::Skills;

    fn fallback(&self, language: Language) -> String {
        fallback::skills(&self.job_title, language)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    success: bool,
    data: Option<GenerateData>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateData {
    result: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AiAssistClient {
    remote: Arc<dyn RemoteApi>,
    policy: RetryPolicy,
}

impl AiAssistClient {
    pub fn new(remote: Arc<dyn RemoteApi>, policy: RetryPolicy) -> Self {
        Self { remote, policy }
    }

    /// Generates text for one section. Never mutates anything; the caller merges.
    pub async fn generate<I: AssistInput>(
        &self,
        input: &I,
        language: Language,
    ) -> Result<AssistOutcome, AssistError> {
        let body = json!({
            "type": I::KIND,
            "data": input,
            "language": language,
        });

        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.remote.post_json(GENERATE_PATH, &[], &body).await {
                Ok(response) => {
                    return interpret(response, input, language, attempts);
                }
                Err(e) if self.policy.should_retry(attempts) => {
                    let delay = self.policy.backoff(attempts);
                    warn!(
                        "AI-Assist {:?} attempt {}/{} failed ({e}), retrying after {}ms...",
                        I::KIND,
                        attempts,
                        self.policy.max_attempts(),
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!(
                        "AI-Assist {:?} unreachable after {} attempts ({e}); using local fallback",
                        I::KIND,
                        attempts
                    );
                    return Ok(fallback_outcome(input, language, attempts));
                }
            }
        }
    }
}

fn interpret<I: AssistInput>(
    response: RemoteResponse,
    input: &I,
    language: Language,
    attempts: u32,
) -> Result<AssistOutcome, AssistError> {
    if response.status == SERVICE_UNAVAILABLE {
        warn!(
            "AI-Assist {:?}: generation service unavailable (503); using local fallback",
            I::KIND
        );
        return Ok(fallback_outcome(input, language, attempts));
    }

    if !response.is_success() {
        return Err(AssistError::Rejected {
            status: response.status,
            message: response.error_message(),
        });
    }

    let parsed: GenerateResponse = response
        .json()
        .map_err(|_| AssistError::MalformedResponse)?;

    if !parsed.success {
        return Err(match parsed.message {
            Some(message) if !message.trim().is_empty() => AssistError::Generation(message),
            _ => AssistError::MalformedResponse,
        });
    }

    let text = parsed
        .data
        .and_then(|d| d.result)
        .filter(|r| !r.trim().is_empty())
        .ok_or(AssistError::MalformedResponse)?;

    info!("AI-Assist {:?} generated {} chars", I::KIND, text.len());

    Ok(AssistOutcome {
        text,
        source: AssistSource::Service,
        attempts,
    })
}

fn fallback_outcome<I: AssistInput>(input: &I, language: Language, attempts: u32) -> AssistOutcome {
    AssistOutcome {
        text: input.fallback(language),
        source: AssistSource::Fallback,
        attempts,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

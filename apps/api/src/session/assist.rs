//! AI-Assist orchestration for a session: snapshot → generate → merge.
//!
//! The generation input is built from a snapshot, the lock is released for the
//! network call, and the result is merged into the *current* document as a
//! whole-section replace. A failed generation leaves the session untouched.
//! A description is only written back if its entry is unchanged since the
//! snapshot; otherwise the request fails with a conflict.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ai_assist::{AiAssistClient, AssistKind, AssistOutcome, AssistSource};
use crate::document::{Document, SectionKind, SectionValue};
use crate::editors::{EditorError, ExperienceEditor, SectionEditor, SkillsEditor, SummaryEditor};
use crate::errors::AppError;
use crate::i18n::Language;
use crate::session::{BuilderSession, SessionStore};

/// What to generate. `Description` targets one experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssistTarget {
    Summary,
    Description { index: usize },
    Skills,
}

impl AssistTarget {
    pub fn kind(self) -> AssistKind {
        match self {
            AssistTarget::Summary => AssistKind::Summary,
            AssistTarget::Description { .. } => AssistKind::Description,
            AssistTarget::Skills => AssistKind::Skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistResult {
    pub kind: AssistKind,
    pub text: String,
    pub source: AssistSource,
    pub attempts: u32,
    /// The section as written back.
    pub section: SectionValue,
}

pub async fn assist_session(
    store: &SessionStore,
    client: &AiAssistClient,
    session_id: Uuid,
    target: AssistTarget,
    language: Language,
) -> Result<AssistResult, AppError> {
    let snapshot = store
        .snapshot(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    let document = snapshot.document();

    let outcome: AssistOutcome = match target {
        AssistTarget::Summary => {
            let input = SummaryEditor::open(document).generation_input(
                &document.personal_info,
                &document.experience,
                &document.skills,
            );
            client.generate(&input, language).await?
        }
        AssistTarget::Description { index } => {
            let input = ExperienceEditor::open(document).description_input(index)?;
            client.generate(&input, language).await?
        }
        AssistTarget::Skills => {
            let input = SkillsEditor::open(document)
                .suggestion_input(&document.personal_info.job_title, &document.experience);
            client.generate(&input, language).await?
        }
    };

    let text = outcome.text.clone();
    let section = store
        .update(session_id, |session| apply(session, document, target, text))
        .await
        .ok_or_else(|| session_not_found(session_id))??;

    Ok(AssistResult {
        kind: target.kind(),
        text: outcome.text,
        source: outcome.source,
        attempts: outcome.attempts,
        section,
    })
}

/// Re-opens the editor on the live document so edits made during the
/// network call to other sections are kept. `generated_from` is the snapshot
/// the input was built from.
fn apply(
    session: &mut BuilderSession,
    generated_from: &Document,
    target: AssistTarget,
    text: String,
) -> Result<SectionValue, EditorError> {
    let section = match target {
        AssistTarget::Summary => {
            let mut editor = SummaryEditor::open(session.document());
            editor.replace(text);
            editor.into_section()
        }
        AssistTarget::Description { index } => {
            let mut editor = ExperienceEditor::open(session.document());
            if editor.value().get(index) != generated_from.experience.get(index) {
                return Err(EditorError::StaleEntry {
                    section: SectionKind::Experience.as_str(),
                    index,
                });
            }
            editor.set_description(index, text)?;
            editor.into_section()
        }
        AssistTarget::Skills => {
            let mut editor = SkillsEditor::open(session.document());
            let added = editor.merge_suggestions(&text);
            info!("Merged {added} suggested skills into session {}", session.id);
            editor.into_section()
        }
    };
    session.set_section(section.clone());
    Ok(section)
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

//! Builder sessions: one Document plus one Step Controller per open builder.
//!
//! Sessions live in memory only; a restart discards them. The store lock is
//! held only to read a snapshot or apply a whole-section replace, never across
//! a network call, so concurrent operations on a session interleave freely and
//! the last write for a section wins.

pub mod assist;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::info;
use uuid::Uuid;

use crate::document::{Document, SectionKind, SectionValue};
use crate::editors::{
    EditorError, EditorView, EducationEditor, ExperienceEditor, PersonalInfoEditor,
    SectionEditor, SkillsEditor, SummaryEditor,
};
use crate::i18n::Language;
use crate::steps::{Step, StepController, StepError, StepProgress};
use crate::templates::{render, RenderedCv};

/// What the current step shows: a section form, or the rendered preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepView {
    Editor(EditorView),
    Preview(RenderedCv),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Navigation {
    Next,
    Prev,
    GoTo { step: u8 },
}

#[derive(Debug, Clone)]
pub struct BuilderSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    document: Document,
    steps: StepController,
}

impl BuilderSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            document: Document::new(),
            steps: StepController::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn progress(&self, language: Language) -> StepProgress {
        self.steps.progress(language)
    }

    pub fn set_section(&mut self, value: SectionValue) {
        self.document.set_section(value);
    }

    pub fn navigate(&mut self, navigation: Navigation) -> Result<Step, StepError> {
        match navigation {
            Navigation::Next => Ok(self.steps.next()),
            Navigation::Prev => Ok(self.steps.prev()),
            Navigation::GoTo { step } => self.steps.go_to(step),
        }
    }

    /// Appends to a list section through its editor. Skills require a value;
    /// experience and education append an empty entry.
    pub fn add_item(
        &mut self,
        section: SectionKind,
        value: Option<&str>,
    ) -> Result<SectionValue, EditorError> {
        match section {
            SectionKind::Experience => {
                let mut editor = ExperienceEditor::open(&self.document);
                editor.add();
                Ok(editor.commit(&mut self.document))
            }
            SectionKind::Education => {
                let mut editor = EducationEditor::open(&self.document);
                editor.add();
                Ok(editor.commit(&mut self.document))
            }
            SectionKind::Skills => {
                let skill = value.ok_or(EditorError::MissingValue(section.as_str()))?;
                let mut editor = SkillsEditor::open(&self.document);
                editor.add(skill);
                Ok(editor.commit(&mut self.document))
            }
            other => Err(EditorError::NotAList(other.as_str())),
        }
    }

    pub fn remove_item(
        &mut self,
        section: SectionKind,
        index: usize,
    ) -> Result<SectionValue, EditorError> {
        match section {
            SectionKind::Experience => {
                let mut editor = ExperienceEditor::open(&self.document);
                editor.remove_at(index)?;
                Ok(editor.commit(&mut self.document))
            }
            SectionKind::Education => {
                let mut editor = EducationEditor::open(&self.document);
                editor.remove_at(index)?;
                Ok(editor.commit(&mut self.document))
            }
            SectionKind::Skills => {
                let mut editor = SkillsEditor::open(&self.document);
                editor.remove_at(index)?;
                Ok(editor.commit(&mut self.document))
            }
            other => Err(EditorError::NotAList(other.as_str())),
        }
    }

    pub fn current_view(&self, language: Language) -> StepView {
        let document = &self.document;
        let view = match self.steps.current().section() {
            Some(SectionKind::PersonalInfo) => PersonalInfoEditor::open(document).render(language),
            Some(SectionKind::Summary) => SummaryEditor::open(document).render(language),
            Some(SectionKind::Experience) => ExperienceEditor::open(document).render(language),
            Some(SectionKind::Education) => EducationEditor::open(document).render(language),
            Some(SectionKind::Skills) => SkillsEditor::open(document).render(language),
            // Steps without a section editor show the rendered CV
            _ => return StepView::Preview(render(document.meta.template, document, language)),
        };
        StepView::Editor(view)
    }
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}

struct StoredSession {
    session: BuilderSession,
    last_access: Instant,
}

/// In-memory session map. Every read or write counts as access; sessions
/// idle for longer than the configured TTL are dropped by `spawn_expiry`.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> BuilderSession {
        let session = BuilderSession::new();
        self.inner.write().await.insert(
            session.id,
            StoredSession {
                session: session.clone(),
                last_access: Instant::now(),
            },
        );
        session
    }

    /// Cloned snapshot; changes to it are not written back.
    pub async fn snapshot(&self, id: Uuid) -> Option<BuilderSession> {
        let mut sessions = self.inner.write().await;
        let stored = sessions.get_mut(&id)?;
        stored.last_access = Instant::now();
        Some(stored.session.clone())
    }

    /// Runs `f` against the live session under the write lock.
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut BuilderSession) -> T) -> Option<T> {
        let mut sessions = self.inner.write().await;
        let stored = sessions.get_mut(&id)?;
        stored.last_access = Instant::now();
        Some(f(&mut stored.session))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Drops every session not accessed for at least `ttl`. Returns how many went.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| now.duration_since(stored.last_access) < ttl);
        before - sessions.len()
    }

    /// Runs `evict_idle` every `period` until the runtime shuts down.
    pub fn spawn_expiry(&self, ttl: Duration, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle(ttl).await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle builder sessions");
                }
            }
        })
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

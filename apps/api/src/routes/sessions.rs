use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::{Document, SectionKind, SectionValue};
use crate::errors::AppError;
use crate::export::content_disposition;
use crate::i18n::Language;
use crate::session::assist::{assist_session, AssistResult, AssistTarget};
use crate::session::{BuilderSession, Navigation, StepView};
use crate::state::AppState;
use crate::steps::StepProgress;
use crate::templates::{render, RenderedCv, TemplateId};

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Language,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub document: Document,
    pub progress: StepProgress,
    pub view: StepView,
}

impl SessionResponse {
    fn new(session: &BuilderSession, language: Language) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            document: session.document().clone(),
            progress: session.progress(language),
            view: session.current_view(language),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddItemRequest {
    /// Required for skills; ignored for experience and education.
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistRequest {
    #[serde(flatten)]
    pub target: AssistTarget,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub lang: Language,
    /// Overrides the session's chosen template for this render only.
    pub template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportRequest {
    /// Falls back to the session's chosen template.
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub language: Language,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Query(params): Query<LanguageQuery>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    info!("Created builder session {}", session.id);
    (
        StatusCode::CREATED,
        Json(SessionResponse::new(&session, params.lang)),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.snapshot(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(SessionResponse::new(&session, params.lang)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// PUT /api/v1/sessions/:id/sections
/// Body: `{"section": "...", "value": ...}`; the whole section is replaced.
pub async fn handle_replace_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<LanguageQuery>,
    Json(value): Json<SectionValue>,
) -> Result<Json<SessionResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |session| {
            let kind = value.kind();
            session.set_section(value);
            debug!("Session {id}: replaced section {}", kind.as_str());
            SessionResponse::new(session, params.lang)
        })
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/sections/:section/items
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, SectionKind)>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<SectionValue>, AppError> {
    let value = state
        .sessions
        .update(id, |session| session.add_item(section, req.value.as_deref()))
        .await
        .ok_or_else(|| not_found(id))??;
    Ok(Json(value))
}

/// DELETE /api/v1/sessions/:id/sections/:section/items/:index
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, SectionKind, usize)>,
) -> Result<Json<SectionValue>, AppError> {
    let value = state
        .sessions
        .update(id, |session| session.remove_item(section, index))
        .await
        .ok_or_else(|| not_found(id))??;
    Ok(Json(value))
}

/// POST /api/v1/sessions/:id/navigation
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<LanguageQuery>,
    Json(navigation): Json<Navigation>,
) -> Result<Json<SessionResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |session| {
            session
                .navigate(navigation)
                .map(|_| SessionResponse::new(session, params.lang))
        })
        .await
        .ok_or_else(|| not_found(id))??;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/assist
pub async fn handle_assist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssistRequest>,
) -> Result<Json<AssistResult>, AppError> {
    let result = assist_session(&state.sessions, &state.assist, id, req.target, req.language).await?;
    Ok(Json(result))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewQuery>,
) -> Result<Json<RenderedCv>, AppError> {
    let session = state.sessions.snapshot(id).await.ok_or_else(|| not_found(id))?;
    let document = session.document();
    let template = match params.template.as_deref() {
        Some(requested) => TemplateId::resolve(Some(requested)),
        None => document.meta.template,
    };
    Ok(Json(render(template, document, params.lang)))
}

/// POST /api/v1/sessions/:id/export
/// Renders the PDF remotely, saves it through the download sink and streams
/// it back as an attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let session = state.sessions.snapshot(id).await.ok_or_else(|| not_found(id))?;
    let document = session.document();
    let template = match req.template.as_deref() {
        Some(requested) => TemplateId::resolve(Some(requested)),
        None => document.meta.template,
    };

    let download = state
        .exporter
        .export_pdf(document, template, req.language)
        .await?;

    let sink = state.downloads.clone();
    let staged = download.clone();
    let delivered = tokio::task::spawn_blocking(move || sink.deliver(&staged))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    info!(
        "Session {id} exported {} ({} bytes)",
        delivered.filename, delivered.size
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&delivered.filename)),
        ],
        download.bytes,
    )
        .into_response())
}

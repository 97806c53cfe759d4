use std::sync::Arc;

use crate::ai_assist::AiAssistClient;
use crate::export::{DownloadSink, PdfExporter};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub assist: AiAssistClient,
    pub exporter: PdfExporter,
    /// Where exported PDFs are saved. Default: `DirectorySink` over EXPORT_DIR.
    pub downloads: Arc<dyn DownloadSink>,
}

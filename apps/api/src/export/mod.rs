//! Export Pipeline: Document + template → remote PDF render → download.
//!
//! Flow: required-field check → normalize (clear end dates of current roles)
//!       → POST /cv/generate-pdf?template=<id> → status check → content-type
//!       check → filename derivation → `DownloadSink`.
//!
//! No automatic retry and no request deduplication: a second export while one
//! is in flight is a second request.

pub mod download;
pub mod filename;

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::document::Document;
use crate::i18n::Language;
use crate::remote::{RemoteApi, RemoteError, PDF_PATH};
use crate::templates::TemplateId;

pub use download::{DirectorySink, DownloadSink};
pub use filename::{content_disposition, derive_filename};

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error(transparent)]
    Transport(#[from] RemoteError),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Expected a PDF but the service returned '{}'", .content_type.as_deref().unwrap_or("no content type"))]
    NotPdf { content_type: Option<String> },

    #[error("The PDF service returned an empty document")]
    EmptyPayload,

    #[error("Failed to encode the export request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to save the PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// A validated PDF ready for delivery.
#[derive(Debug, Clone)]
pub struct PdfDownload {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Clone)]
pub struct PdfExporter {
    remote: Arc<dyn RemoteApi>,
}

impl PdfExporter {
    pub fn new(remote: Arc<dyn RemoteApi>) -> Self {
        Self { remote }
    }

    pub async fn export_pdf(
        &self,
        document: &Document,
        template: TemplateId,
        language: Language,
    ) -> Result<PdfDownload, ExportError> {
        let missing = document.missing_required_fields();
        if !missing.is_empty() {
            return Err(ExportError::MissingFields(missing));
        }

        let body = request_body(document, template, language)?;
        let response = self
            .remote
            .post_json(PDF_PATH, &[("template", template.as_str())], &body)
            .await?;

        if !response.is_success() {
            let message = response.error_message();
            warn!("PDF render rejected ({}): {message}", response.status);
            return Err(ExportError::Rejected {
                status: response.status,
                message,
            });
        }

        if !is_pdf(response.content_type.as_deref()) {
            warn!(
                "PDF render returned non-PDF content type {:?}",
                response.content_type
            );
            return Err(ExportError::NotPdf {
                content_type: response.content_type,
            });
        }

        if response.body.is_empty() {
            return Err(ExportError::EmptyPayload);
        }

        let filename = derive_filename(&document.personal_info.full_name, Utc::now());
        info!(
            "PDF rendered with template {} ({} bytes) as {filename}",
            template.as_str(),
            response.body.len()
        );

        Ok(PdfDownload {
            filename,
            bytes: response.body,
        })
    }
}

/// Normalized Document with the chosen template, plus `language`.
fn request_body(
    document: &Document,
    template: TemplateId,
    language: Language,
) -> Result<Value, ExportError> {
    let mut normalized = document.normalized();
    normalized.meta.template = template;

    let mut body = serde_json::to_value(&normalized)?;
    if let Value::Object(map) = &mut body {
        map.insert("language".to_string(), json!(language));
    }
    Ok(body)
}

fn is_pdf(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains(PDF_CONTENT_TYPE))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ai_assist::AssistError;
use crate::editors::EditorError;
use crate::export::ExportError;
use crate::steps::StepError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The remote CV service answered with a non-2xx status.
    #[error("Remote service error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The remote CV service was unreachable or answered with something unusable.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EditorError> for AppError {
    fn from(e: EditorError) -> Self {
        match e {
            EditorError::StaleEntry { .. } => AppError::Conflict(e.to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<StepError> for AppError {
    fn from(e: StepError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<AssistError> for AppError {
    fn from(e: AssistError) -> Self {
        match e {
            AssistError::Rejected { status, message } => AppError::Upstream { status, message },
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::MissingFields(_) => AppError::Validation(e.to_string()),
            ExportError::Rejected { status, message } => AppError::Upstream { status, message },
            ExportError::Transport(_) | ExportError::NotPdf { .. } | ExportError::EmptyPayload => {
                AppError::BadGateway(e.to_string())
            }
            ExportError::Encode(inner) => AppError::Internal(inner.into()),
            ExportError::Io(inner) => AppError::Internal(inner.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            // 4xx from the service are the caller's problem and keep the
            // service's wording; 5xx are ours to report as a gateway failure.
            AppError::Upstream { status, message } if (400..500).contains(status) => {
                (StatusCode::BAD_REQUEST, "REMOTE_REJECTED", message.clone())
            }
            AppError::Upstream { status, message } => {
                tracing::error!("Remote service error {status}: {message}");
                (StatusCode::BAD_GATEWAY, "REMOTE_ERROR", message.clone())
            }
            AppError::BadGateway(msg) => {
                tracing::error!("Bad gateway: {msg}");
                (StatusCode::BAD_GATEWAY, "BAD_GATEWAY", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteError;

    #[test]
    fn test_editor_and_step_errors_are_validation() {
        let err: AppError = EditorError::NotAList("summary").into();
        assert!(matches!(err, AppError::Validation(_)));
        let err: AppError = StepError::OutOfRange(9).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_stale_entry_is_conflict() {
        let err: AppError = EditorError::StaleEntry {
            section: "experience",
            index: 0,
        }
        .into();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_remote_4xx_is_bad_request_and_5xx_is_bad_gateway() {
        let rejected: AppError = AssistError::Rejected {
            status: 422,
            message: "Too short".to_string(),
        }
        .into();
        assert_eq!(rejected.into_response().status(), StatusCode::BAD_REQUEST);

        let failed: AppError = ExportError::Rejected {
            status: 500,
            message: "Renderer crashed".to_string(),
        }
        .into();
        assert_eq!(failed.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_export_error_mapping() {
        let missing: AppError = ExportError::MissingFields(vec!["email"]).into();
        assert!(matches!(missing, AppError::Validation(ref m) if m.contains("email")));

        let transport: AppError = ExportError::Transport(RemoteError("timeout".to_string())).into();
        assert!(matches!(transport, AppError::BadGateway(_)));

        let not_pdf: AppError = ExportError::NotPdf { content_type: None }.into();
        assert_eq!(not_pdf.into_response().status(), StatusCode::BAD_GATEWAY);

        let io: AppError = ExportError::Io(std::io::Error::other("disk full")).into();
        assert_eq!(
            io.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_malformed_assist_response_is_bad_gateway() {
        let err: AppError = AssistError::MalformedResponse.into();
        assert!(matches!(err, AppError::BadGateway(_)));
    }
}

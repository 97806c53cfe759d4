pub mod health;
pub mod sessions;
pub mod templates;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(templates::handle_list_templates))
        // Builder sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/sections",
            put(sessions::handle_replace_section),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section/items",
            post(sessions::handle_add_item),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section/items/:index",
            delete(sessions::handle_remove_item),
        )
        .route(
            "/api/v1/sessions/:id/navigation",
            post(sessions::handle_navigate),
        )
        // Remote-backed operations
        .route("/api/v1/sessions/:id/assist", post(sessions::handle_assist))
        .route("/api/v1/sessions/:id/preview", get(sessions::handle_preview))
        .route("/api/v1/sessions/:id/export", post(sessions::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ai_assist::{AiAssistClient, RetryPolicy};
    use crate::export::{DirectorySink, PdfExporter};
    use crate::remote::testing::{generated, json_response, pdf_response, ScriptedRemote};
    use crate::session::SessionStore;

    struct Harness {
        router: Router,
        remote: Arc<ScriptedRemote>,
        export_dir: tempfile::TempDir,
    }

    fn harness(remote: ScriptedRemote) -> Harness {
        let remote = Arc::new(remote);
        let export_dir = tempfile::tempdir().unwrap();
        let state = AppState {
            sessions: SessionStore::new(),
            assist: AiAssistClient::new(remote.clone(), RetryPolicy::default()),
            exporter: PdfExporter::new(remote.clone()),
            downloads: Arc::new(DirectorySink::new(export_dir.path()).unwrap()),
        };
        Harness {
            router: build_router(state),
            remote,
            export_dir,
        }
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(router, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_session(router: &Router) -> String {
        let (status, body) = send_json(router, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    async fn fill_personal_info(router: &Router, id: &str) {
        let (status, _) = send_json(
            router,
            "PUT",
            &format!("/api/v1/sessions/{id}/sections"),
            Some(json!({
                "section": "personalInfo",
                "value": {
                    "fullName": "Hassan Karim",
                    "jobTitle": "Football Coach",
                    "email": "hassan@example.com",
                    "phone": "+962700000000"
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness(ScriptedRemote::new());
        let (status, body) = send_json(&h.router, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "cv-builder-api");
    }

    #[tokio::test]
    async fn test_templates_lists_catalog() {
        let h = harness(ScriptedRemote::new());
        let (status, body) = send_json(&h.router, "GET", "/api/v1/templates", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["id"], "professional-classic");
    }

    #[tokio::test]
    async fn test_new_session_starts_on_first_step_with_empty_document() {
        let h = harness(ScriptedRemote::new());
        let (status, body) = send_json(&h.router, "POST", "/api/v1/sessions?lang=ar", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["progress"]["current"], 1);
        assert_eq!(body["progress"]["isFirst"], true);
        assert_eq!(body["document"]["summary"], "");
        assert_eq!(body["view"]["type"], "editor");
    }

    #[tokio::test]
    async fn test_unknown_session_is_404_with_error_shape() {
        let h = harness(ScriptedRemote::new());
        let uri = format!("/api/v1/sessions/{}", uuid::Uuid::new_v4());
        let (status, body) = send_json(&h.router, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_replace_section_then_read_back() {
        let h = harness(ScriptedRemote::new());
        let id = create_session(&h.router).await;
        fill_personal_info(&h.router, &id).await;

        let (_, body) = send_json(&h.router, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(body["document"]["personalInfo"]["fullName"], "Hassan Karim");
    }

    #[tokio::test]
    async fn test_items_add_and_remove() {
        let h = harness(ScriptedRemote::new());
        let id = create_session(&h.router).await;
        let items = format!("/api/v1/sessions/{id}/sections/skills/items");

        send_json(&h.router, "POST", &items, Some(json!({ "value": "Tactics" }))).await;
        let (status, body) =
            send_json(&h.router, "POST", &items, Some(json!({ "value": "Tactics" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], json!(["Tactics"]));

        let (status, body) = send_json(&h.router, "DELETE", &format!("{items}/3"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send_json(&h.router, "DELETE", &format!("{items}/0"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], json!([]));
    }

    #[tokio::test]
    async fn test_navigation_bounds_and_out_of_range() {
        let h = harness(ScriptedRemote::new());
        let id = create_session(&h.router).await;
        let uri = format!("/api/v1/sessions/{id}/navigation");

        let (_, body) = send_json(&h.router, "POST", &uri, Some(json!({ "action": "prev" }))).await;
        assert_eq!(body["progress"]["current"], 1);

        let (_, body) =
            send_json(&h.router, "POST", &uri, Some(json!({ "action": "go_to", "step": 6 }))).await;
        assert_eq!(body["progress"]["isLast"], true);
        assert_eq!(body["view"]["type"], "preview");

        let (status, _) =
            send_json(&h.router, "POST", &uri, Some(json!({ "action": "go_to", "step": 7 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assist_writes_generated_summary() {
        let h = harness(ScriptedRemote::with(vec![Ok(generated("Seasoned coach."))]));
        let id = create_session(&h.router).await;

        let (status, body) = send_json(
            &h.router,
            "POST",
            &format!("/api/v1/sessions/{id}/assist"),
            Some(json!({ "kind": "summary", "language": "en" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "service");
        assert_eq!(body["section"], json!({ "section": "summary", "value": "Seasoned coach." }));

        let call = &h.remote.calls()[0];
        assert_eq!(call.body["type"], "summary");
        assert_eq!(call.body["language"], "en");
    }

    #[tokio::test]
    async fn test_assist_rejection_is_surfaced() {
        let h = harness(ScriptedRemote::with(vec![Ok(json_response(
            400,
            json!({ "message": "Unsupported type" }),
        ))]));
        let id = create_session(&h.router).await;

        let (status, body) = send_json(
            &h.router,
            "POST",
            &format!("/api/v1/sessions/{id}/assist"),
            Some(json!({ "kind": "skills" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Unsupported type");
    }

    #[tokio::test]
    async fn test_preview_uses_requested_template() {
        let h = harness(ScriptedRemote::new());
        let id = create_session(&h.router).await;
        fill_personal_info(&h.router, &id).await;

        let (status, body) = send_json(
            &h.router,
            "GET",
            &format!("/api/v1/sessions/{id}/preview?template=sports-champion&lang=ar"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "sports-champion");
        assert_eq!(body["direction"], "rtl");
        assert_eq!(body["header"]["name"], "Hassan Karim");
    }

    #[tokio::test]
    async fn test_export_streams_pdf_and_saves_copy() {
        let h = harness(ScriptedRemote::with(vec![Ok(pdf_response(b"%PDF-1.7"))]));
        let id = create_session(&h.router).await;
        fill_personal_info(&h.router, &id).await;

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/sessions/{id}/export"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "template": "coach-elite" }).to_string()))
            .unwrap();
        let response = h.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"cv-hassan-karim-"));
        assert!(disposition.contains("; filename*=UTF-8''cv-hassan-karim-"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.7");

        let saved: Vec<_> = std::fs::read_dir(h.export_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].ends_with(".pdf"));
        assert_eq!(
            h.remote.calls()[0].query,
            vec![("template".to_string(), "coach-elite".to_string())]
        );
    }

    #[tokio::test]
    async fn test_export_without_required_fields_is_rejected_locally() {
        let h = harness(ScriptedRemote::new());
        let id = create_session(&h.router).await;

        let (status, body) = send_json(
            &h.router,
            "POST",
            &format!("/api/v1/sessions/{id}/export"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("fullName"));
        assert_eq!(h.remote.call_count(), 0);
    }

    #[tokio::test]
    async fn test_export_non_pdf_is_bad_gateway_and_saves_nothing() {
        let h = harness(ScriptedRemote::with(vec![Ok(json_response(
            200,
            json!({ "success": true }),
        ))]));
        let id = create_session(&h.router).await;
        fill_personal_info(&h.router, &id).await;

        let (status, _) = send(
            &h.router,
            "POST",
            &format!("/api/v1/sessions/{id}/export"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(std::fs::read_dir(h.export_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let h = harness(ScriptedRemote::new());
        let id = create_session(&h.router).await;
        let uri = format!("/api/v1/sessions/{id}");
        let (status, _) = send(&h.router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&h.router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

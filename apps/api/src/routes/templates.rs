use axum::Json;

use crate::templates::{catalog, TemplateDescriptor};

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [TemplateDescriptor]> {
    Json(catalog())
}

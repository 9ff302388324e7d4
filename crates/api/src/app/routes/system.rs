use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /status
///
/// Outcome of the startup catalog load, plus a human-readable summary line.
pub async fn status(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let status = services.status();
    let mut body = serde_json::to_value(status).unwrap_or_default();
    if let Some(obj) = body.as_object_mut() {
        obj.insert("summary".to_string(), status.summary().into());
    }
    (StatusCode::OK, Json(body))
}

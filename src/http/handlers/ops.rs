use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"ok": true}))).into_response()
}

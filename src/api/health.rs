use axum::{http::StatusCode, response::IntoResponse, Json};

/// GET /healthz - Liveness check
///
/// The service is stateless, so being able to answer at all means healthy.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "healthy" })),
    )
}

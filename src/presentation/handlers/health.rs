use axum::http::StatusCode;
use axum::response::IntoResponse;

/// GET performs no action and returns an empty 200. Reserved for future
/// health-check use.
pub async fn health_handler() -> impl IntoResponse {
    StatusCode::OK
}

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TranscriptionEngine;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, transcribe_handler};
use crate::presentation::state::AppState;

/// POST on any path is a transcription request; GET on any path is a no-op.
pub fn create_router<E>(state: AppState<E>) -> Router
where
    E: TranscriptionEngine + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", post(transcribe_handler::<E>).get(health_handler))
        .route("/{*path}", post(transcribe_handler::<E>).get(health_handler))
        // upload size is enforced by the handler against the declared and
        // validated Content-Length, not axum's default 2 MiB cap
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
}

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::sync::mpsc::error::TrySendError;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::EvictionSignal;
use crate::domain::LanguageHint;
use crate::presentation::state::AppState;

pub const API_KEY_HEADER: &str = "ApiKey";
pub const LANG_HEADER: &str = "Lang";

/// One upload end to end: size validation, authentication, body read,
/// language normalization, cache write, engine call, response, and finally a
/// nudge to the eviction worker. Works on any request path.
#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<E>(
    State(state): State<AppState<E>>,
    request: Request,
) -> Response
where
    E: TranscriptionEngine + 'static,
{
    let headers = request.headers();

    // size first: an undeclared or oversized body is rejected before the
    // credential is even looked at
    let declared_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    if declared_length == 0 {
        return (StatusCode::LENGTH_REQUIRED, "Content-Length required").into_response();
    }
    if declared_length > state.max_file_size {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            "File size exceeds maximum allowed",
        )
            .into_response();
    }

    let supplied_key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if !state.verifier.verify(supplied_key) {
        tracing::warn!("Rejected request with missing or invalid api key");
        return auth_rejection();
    }

    let lang_header = headers
        .get(LANG_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let audio_data = match to_bytes(request.into_body(), declared_length as usize).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read request body");
            return (StatusCode::BAD_REQUEST, "Failed to read request body").into_response();
        }
    };

    let language = match lang_header.as_deref() {
        None => LanguageHint::AUTO,
        Some(raw) => LanguageHint::parse(raw).unwrap_or_else(|| {
            tracing::warn!(lang = %raw, "Unsupported language hint, trying auto");
            LanguageHint::AUTO
        }),
    };

    let (key, blob_path) = match state.cache.put(&audio_data).await {
        Ok(entry) => entry,
        Err(e) => {
            tracing::error!(error = %e, "Failed to cache uploaded audio");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    };

    let transcript = match state.engine.transcribe(&blob_path, language).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(key = %key, error = %e, "Transcription failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Transcription failed").into_response();
        }
    };

    tracing::info!(
        key = %key,
        bytes = audio_data.len(),
        language = %language,
        "Transcription completed"
    );

    let response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        transcript,
    )
        .into_response();

    // fire-and-forget: the response above is already built, eviction runs on
    // its own worker
    match state.eviction_sender.try_send(EvictionSignal) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::debug!("Eviction pass already pending");
        }
        Err(TrySendError::Closed(_)) => {
            tracing::warn!("Eviction worker is gone, cache size is unbounded");
        }
    }

    response
}

/// Authentication failures carry no detail at all: empty body, connection
/// closed. Preserved from the original contract to avoid leaking auth state.
fn auth_rejection() -> Response {
    let mut response = StatusCode::UNAUTHORIZED.into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));
    response
}

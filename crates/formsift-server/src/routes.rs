//! Route handlers for the formsift API.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{error, info};

use formsift_core::FormsiftError;

use crate::server::AppState;

/// `POST /api/parse` — multipart upload of one document in a `file` part.
///
/// Returns the parsed document as JSON, 400 for unsupported media types or
/// a missing part, 500 when a text-extraction collaborator fails.
pub async fn parse_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, format!("invalid multipart body: {}", e))
                    .into_response();
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, format!("failed to read upload: {}", e))
                    .into_response();
            }
        };

        info!(media_type = %content_type, size = bytes.len(), "parse request");

        // PDF stripping and OCR are synchronous and can be slow; keep them
        // off the async worker.
        let pipeline = state.pipeline.clone();
        let parsed = tokio::task::spawn_blocking(move || pipeline.parse(&bytes, &content_type))
            .await;

        return match parsed {
            Ok(Ok(document)) => Json(document).into_response(),
            Ok(Err(e)) => error_response(e),
            Err(e) => {
                error!(error = %e, "parse task panicked");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        };
    }

    (StatusCode::BAD_REQUEST, "missing 'file' part").into_response()
}

/// `POST /api/parse-data` — stage-1 structuring. Always 200 with a string
/// payload (completion text or error envelope).
pub async fn parse_data(State(state): State<AppState>, Json(request): Json<Value>) -> String {
    state.structurer.extract_structured_data(&request).await
}

/// `POST /api/map-schema` — stage-2 schema mapping. Always 200 with a
/// string payload.
pub async fn map_schema(State(state): State<AppState>, Json(request): Json<Value>) -> String {
    state.structurer.map_to_schema(&request).await
}

/// Map a pipeline failure to an HTTP response: client errors carry their
/// message, collaborator failures are logged and answered generically.
fn error_response(err: FormsiftError) -> Response {
    if err.is_client_error() {
        (StatusCode::BAD_REQUEST, err.to_string()).into_response()
    } else {
        error!(error = %err, "document parsing failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

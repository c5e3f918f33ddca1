//! HTTP server setup and shared application state.

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use formsift_core::{DocumentParsingPipeline, OcrTextSource, PdfTextSource};
use formsift_llm::DataStructurer;

use crate::routes;

/// The production pipeline type behind the parse endpoint.
pub type Pipeline = DocumentParsingPipeline<PdfTextSource, OcrTextSource>;

/// Application state shared across routes.
///
/// Everything here is immutable after startup; requests share it without
/// locks.
#[derive(Clone)]
pub struct AppState {
    /// Document parsing pipeline (PDF + OCR sources).
    pub pipeline: Arc<Pipeline>,
    /// Two-stage LLM structurer.
    pub structurer: DataStructurer,
}

impl AppState {
    /// Build the shared state from its components.
    pub fn new(pipeline: Pipeline, structurer: DataStructurer) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            structurer,
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/parse", post(routes::parse_document))
        .route("/api/parse-data", post(routes::parse_data))
        .route("/api/map-schema", post(routes::map_schema))
        .route("/api/health", get(|| async { "OK" }))
        .with_state(state)
}

/// Start the Axum HTTP server and serve until the process exits.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(state);

    info!("formsift HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

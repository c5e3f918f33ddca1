//! Serve command - run the HTTP API server.

use std::net::SocketAddr;

use clap::Args;
use tracing::info;

use formsift_core::{DocumentParsingPipeline, OcrTextSource, PdfTextSource};
use formsift_llm::{DataStructurer, StructuringClient};
use formsift_server::AppState;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// OCR model directory (overrides config and environment)
    #[arg(short, long)]
    model_dir: Option<std::path::PathBuf>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(dir) = &args.model_dir {
        config.ocr.model_dir = Some(dir.clone());
    }

    // Fail fast on misconfiguration: OCR models and the provider
    // credential are both required before the listener starts.
    let ocr = OcrTextSource::from_config(&config.ocr)?;
    let pipeline = DocumentParsingPipeline::new(PdfTextSource::new(), ocr);

    let client = StructuringClient::from_env()?
        .with_model(config.llm.model.as_str())
        .with_base_url(config.llm.base_url.as_str());
    let structurer = DataStructurer::new(client);

    info!("starting formsift server on {}", args.bind);
    formsift_server::start_server(args.bind, AppState::new(pipeline, structurer)).await
}

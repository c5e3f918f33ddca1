//! Process command - parse a single document file locally.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use formsift_core::{
    FormFieldExtractor, MediaType, OcrTextSource, ParsedDocument, PdfTextSource, TextSource,
};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// OCR model directory (overrides config and environment)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(dir) = &args.model_dir {
        config.ocr.model_dir = Some(dir.clone());
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let media_type = MediaType::from_extension(extension)
        .ok_or_else(|| anyhow::anyhow!("Unsupported file format: {}", extension))?;

    info!("Processing file: {}", args.input.display());
    let bytes = fs::read(&args.input)?;

    // Only the image path needs OCR models; keep PDFs model-free.
    let text = match media_type {
        MediaType::Pdf => PdfTextSource::new().extract_text(&bytes)?,
        MediaType::Image => OcrTextSource::from_config(&config.ocr)?.extract_text(&bytes)?,
    };

    let fields = FormFieldExtractor::new().extract(&text);
    let document = ParsedDocument::new(text, fields);

    let output = serde_json::to_string_pretty(&document)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!(
                "{} wrote {} fields to {}",
                style("✓").green(),
                document.form_data.len(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

//! Core library for formsift document processing.
//!
//! This crate provides:
//! - PDF text stripping (lopdf + pdf-extract)
//! - OCR text recognition for scanned images (pure-onnx-ocr)
//! - Heuristic form field extraction from raw document text
//! - The document parsing pipeline tying the above together

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;

pub use error::{FormsiftError, OcrError, PdfError, Result};
pub use extract::FormFieldExtractor;
pub use models::config::{FormsiftConfig, LlmSettings, OcrConfig};
pub use models::document::{FormField, ParsedDocument};
pub use ocr::OcrTextSource;
pub use pdf::PdfTextSource;
pub use pipeline::{DocumentParsingPipeline, MediaType, TextSource};

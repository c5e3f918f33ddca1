//! Error types for the formsift-core library.

use thiserror::Error;

/// Main error type for the formsift library.
#[derive(Error, Debug)]
pub enum FormsiftError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The declared media type is neither PDF nor an image.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FormsiftError {
    /// Whether this error is the caller's fault rather than a processing
    /// failure. The HTTP layer maps this to a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FormsiftError::UnsupportedMediaType(_))
    }
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the formsift library.
pub type Result<T> = std::result::Result<T, FormsiftError>;

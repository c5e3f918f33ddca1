//! PDF text stripping using lopdf and pdf-extract.

use tracing::debug;

use crate::error::{PdfError, Result};
use crate::pipeline::TextSource;

/// Text source for digital PDFs.
///
/// lopdf validates the document (parseability, encryption, page count)
/// before pdf-extract strips the text, so malformed uploads fail with a
/// specific error instead of a generic extraction failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    /// Create a new PDF text source.
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let document =
            lopdf::Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            return Err(PdfError::Encrypted.into());
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages.into());
        }

        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        debug!("stripped {} chars of text from {} PDF pages", text.len(), page_count);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_with_parse_error() {
        let source = PdfTextSource::new();
        let err = source.extract_text(b"not a pdf at all").unwrap_err();
        assert!(matches!(
            err,
            crate::error::FormsiftError::Pdf(PdfError::Parse(_))
        ));
    }
}

//! Document parsing pipeline: media-type dispatch to a raw-text source,
//! then field extraction.

use tracing::{debug, info};

use crate::error::{FormsiftError, Result};
use crate::extract::FormFieldExtractor;
use crate::models::document::ParsedDocument;
use crate::ocr::OcrTextSource;
use crate::pdf::PdfTextSource;

/// Document family derived from the declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// `application/pdf`.
    Pdf,
    /// Any `image/*` type.
    Image,
}

impl MediaType {
    /// Classify a declared media type. Anything outside the PDF and image
    /// families is a client error; no parsing is attempted for it.
    pub fn from_declared(content_type: &str) -> Result<Self> {
        let content_type = content_type.trim();
        if content_type.starts_with("application/pdf") {
            Ok(MediaType::Pdf)
        } else if content_type.starts_with("image/") {
            Ok(MediaType::Image)
        } else {
            Err(FormsiftError::UnsupportedMediaType(content_type.to_string()))
        }
    }

    /// Best-effort classification from a file extension, for local (CLI)
    /// processing where no media type is declared.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(MediaType::Pdf),
            "png" | "jpg" | "jpeg" | "tiff" | "bmp" | "webp" => Some(MediaType::Image),
            _ => None,
        }
    }
}

/// A producer of raw text from document bytes.
///
/// Two variants exist in the pipeline: PDF text stripping and OCR. Both
/// feed the same downstream field extraction step.
pub trait TextSource {
    /// Extract the full text of a document, or fail with a format or
    /// recognition error.
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Orchestrates "document bytes -> raw text -> form fields".
///
/// Generic over its text sources so tests can substitute fakes; production
/// code uses [`PdfTextSource`] and [`OcrTextSource`].
pub struct DocumentParsingPipeline<P = PdfTextSource, O = OcrTextSource> {
    pdf: P,
    ocr: O,
    extractor: FormFieldExtractor,
}

impl<P: TextSource, O: TextSource> DocumentParsingPipeline<P, O> {
    /// Build a pipeline from its two text sources.
    pub fn new(pdf: P, ocr: O) -> Self {
        Self {
            pdf,
            ocr,
            extractor: FormFieldExtractor::new(),
        }
    }

    /// Parse a document: select the text source for the declared media
    /// type, extract text, then detect form fields.
    ///
    /// Either a complete [`ParsedDocument`] is returned or the first
    /// failure propagates; there is no retry and no partial result.
    pub fn parse(&self, bytes: &[u8], declared_media_type: &str) -> Result<ParsedDocument> {
        let media_type = MediaType::from_declared(declared_media_type)?;
        info!(?media_type, size = bytes.len(), "parsing document");

        let text = match media_type {
            MediaType::Pdf => self.pdf.extract_text(bytes)?,
            MediaType::Image => self.ocr.extract_text(bytes)?,
        };

        let fields = self.extractor.extract(&text);
        debug!("pipeline produced {} form fields", fields.len());

        Ok(ParsedDocument::new(text, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::models::document::FormField;
    use pretty_assertions::assert_eq;

    struct FixedText(&'static str);

    impl TextSource for FixedText {
        fn extract_text(&self, _bytes: &[u8]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct AlwaysFails;

    impl TextSource for AlwaysFails {
        fn extract_text(&self, _bytes: &[u8]) -> Result<String> {
            Err(PdfError::Parse("collaborator failure".to_string()).into())
        }
    }

    #[test]
    fn classifies_media_types() {
        assert_eq!(
            MediaType::from_declared("application/pdf").unwrap(),
            MediaType::Pdf
        );
        assert_eq!(
            MediaType::from_declared("image/png").unwrap(),
            MediaType::Image
        );
        assert!(MediaType::from_declared("text/plain").is_err());
        assert!(MediaType::from_declared("").is_err());
    }

    #[test]
    fn unsupported_media_type_is_a_client_error() {
        let err = MediaType::from_declared("application/zip").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn pdf_request_uses_the_pdf_source() {
        let pipeline =
            DocumentParsingPipeline::new(FixedText("Name: John Doe"), FixedText("unused"));
        let doc = pipeline.parse(b"%PDF", "application/pdf").unwrap();

        assert_eq!(doc.raw_data, "Name: John Doe");
        assert_eq!(doc.form_data, vec![FormField::new("Name", "John Doe")]);
        assert!(doc.table_data.is_empty());
    }

    #[test]
    fn image_request_uses_the_ocr_source() {
        let pipeline =
            DocumentParsingPipeline::new(FixedText("unused"), FixedText("Quantity\n42"));
        let doc = pipeline.parse(&[0u8; 4], "image/jpeg").unwrap();

        assert_eq!(doc.form_data, vec![FormField::new("Quantity", "42")]);
    }

    #[test]
    fn unsupported_media_type_skips_extraction() {
        let pipeline = DocumentParsingPipeline::new(AlwaysFails, AlwaysFails);
        let err = pipeline.parse(b"anything", "text/html").unwrap_err();
        assert!(matches!(err, FormsiftError::UnsupportedMediaType(_)));
    }

    #[test]
    fn collaborator_failure_propagates_without_partial_result() {
        let pipeline = DocumentParsingPipeline::new(AlwaysFails, FixedText("unused"));
        let err = pipeline.parse(b"%PDF", "application/pdf").unwrap_err();
        assert!(matches!(err, FormsiftError::Pdf(PdfError::Parse(_))));
    }

    #[test]
    fn empty_text_yields_empty_fields_not_an_error() {
        let pipeline = DocumentParsingPipeline::new(FixedText(""), FixedText(""));
        let doc = pipeline.parse(b"%PDF", "application/pdf").unwrap();
        assert!(doc.form_data.is_empty());
    }

    #[test]
    fn extension_classification_for_local_files() {
        assert_eq!(MediaType::from_extension("pdf"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_extension("PNG"), Some(MediaType::Image));
        assert_eq!(MediaType::from_extension("docx"), None);
    }
}

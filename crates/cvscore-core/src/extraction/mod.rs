pub mod docx;
pub mod pdftotext;
pub mod plain;

use crate::error::ScreeningError;
use crate::model::ResumeFormat;
use docx::DocxExtractor;
use pdftotext::PdftotextExtractor;
use plain::PlainTextExtractor;
use tracing::{debug, warn};

/// Trait for resume text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Decode a resume byte buffer into plain text.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ScreeningError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// One extraction backend per supported resume format.
pub struct Extractors {
    pdf: Box<dyn TextExtractor>,
    docx: Box<dyn TextExtractor>,
    txt: Box<dyn TextExtractor>,
}

impl Extractors {
    pub fn new() -> Self {
        Extractors {
            pdf: Box::new(PdftotextExtractor::new()),
            docx: Box::new(DocxExtractor::new()),
            txt: Box::new(PlainTextExtractor::default()),
        }
    }

    /// Replace the backend used for `format`.
    pub fn with(mut self, format: ResumeFormat, extractor: impl TextExtractor + 'static) -> Self {
        let boxed: Box<dyn TextExtractor> = Box::new(extractor);
        match format {
            ResumeFormat::Pdf => self.pdf = boxed,
            ResumeFormat::Docx => self.docx = boxed,
            ResumeFormat::Txt => self.txt = boxed,
        }
        self
    }

    pub fn get(&self, format: ResumeFormat) -> &dyn TextExtractor {
        match format {
            ResumeFormat::Pdf => self.pdf.as_ref(),
            ResumeFormat::Docx => self.docx.as_ref(),
            ResumeFormat::Txt => self.txt.as_ref(),
        }
    }

    /// Extract text from `bytes` with the backend registered for `format`.
    pub fn extract(&self, bytes: &[u8], format: ResumeFormat) -> Result<String, ScreeningError> {
        let backend = self.get(format);
        let text = backend.extract_text(bytes)?;
        debug!(
            backend = backend.backend_name(),
            %format,
            bytes = bytes.len(),
            chars = text.chars().count(),
            "extracted resume text"
        );
        if text.trim().is_empty() {
            warn!(%format, "extracted resume text is empty");
        }
        Ok(text)
    }
}

impl Default for Extractors {
    fn default() -> Self {
        Self::new()
    }
}

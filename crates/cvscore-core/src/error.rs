use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("unsupported resume format '{0}' (expected pdf, docx or txt)")]
    UnsupportedFormat(String),

    #[error("could not decode {format} input: {reason}")]
    MalformedInput { format: String, reason: String },

    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("failed to load skill dictionary from {path}: {reason}")]
    DictionaryLoad { path: PathBuf, reason: String },

    #[error("invalid skill dictionary: {0}")]
    DictionaryInvalid(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScreeningError {
    pub(crate) fn malformed(format: impl ToString, reason: impl ToString) -> Self {
        ScreeningError::MalformedInput {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }
}

use crate::error::ScreeningError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading order output (no `-layout`) keeps a resume's two-column
/// sections from interleaving on one line.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ScreeningError> {
        if !bytes.starts_with(b"%PDF") {
            return Err(ScreeningError::malformed("pdf", "missing %PDF header"));
        }

        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ScreeningError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| ScreeningError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScreeningError::PdftotextNotFound
                } else {
                    ScreeningError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScreeningError::malformed(
                "pdf",
                format!("pdftotext exited with code {code}: {}", stderr.trim()),
            ));
        }

        // Pages are separated by form feeds
        let text = String::from_utf8_lossy(&output.stdout);
        Ok(join_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn join_pages(raw: &str) -> String {
    raw.split('\x0c')
        .map(str::trim_end)
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

use crate::error::ScreeningError;
use crate::extraction::TextExtractor;
use std::fmt;
use std::str::FromStr;

/// Character encoding declared for a plain-text resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl FromStr for TextEncoding {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            other => Err(ScreeningError::InvalidConfiguration(format!(
                "unknown text encoding '{other}'. Available: utf-8, utf-16le, utf-16be, latin1"
            ))),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Utf16Le => write!(f, "utf-16le"),
            TextEncoding::Utf16Be => write!(f, "utf-16be"),
            TextEncoding::Latin1 => write!(f, "latin1"),
        }
    }
}

/// Identity decode of a text resume in its declared encoding.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    encoding: TextEncoding,
}

impl PlainTextExtractor {
    pub fn new(encoding: TextEncoding) -> Self {
        PlainTextExtractor { encoding }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ScreeningError> {
        match self.encoding {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                String::from_utf8(bytes.to_vec())
                    .map_err(|e| ScreeningError::malformed("txt", format!("invalid utf-8: {e}")))
            }
            TextEncoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes, b"\xFF\xFE"),
            TextEncoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes, b"\xFE\xFF"),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

fn decode_utf16(
    bytes: &[u8],
    to_unit: fn([u8; 2]) -> u16,
    bom: &[u8],
) -> Result<String, ScreeningError> {
    let bytes = bytes.strip_prefix(bom).unwrap_or(bytes);
    if bytes.len() % 2 != 0 {
        return Err(ScreeningError::malformed(
            "txt",
            "utf-16 input has an odd number of bytes",
        ));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|e| ScreeningError::malformed("txt", format!("invalid utf-16: {e}")))
}

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

// NNN-NNN-NNNN, NNN.NNN.NNNN, NNN NNN NNNN or ten bare digits
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}|[0-9]{10}").expect("phone pattern is valid")
});

/// First e-mail address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First North American style phone number in the text.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

/// Candidate name. Not extracted yet; always `None`.
pub fn extract_name(_text: &str) -> Option<String> {
    None
}

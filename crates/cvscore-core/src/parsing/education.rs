//! Education and certification extraction.
//!
//! Neither is extracted yet: both return an empty list, and scoring uses
//! fixed sub-scores for them.

pub fn parse_education(_text: &str) -> Vec<String> {
    Vec::new()
}

pub fn extract_certifications(_text: &str) -> Vec<String> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_empty() {
        let text = "B.Sc. Computer Science, MIT 2012\nAWS Certified Solutions Architect";
        assert!(parse_education(text).is_empty());
        assert!(extract_certifications(text).is_empty());
    }
}

use crate::model::ExperienceEntry;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// A job-title phrase ending in a role keyword, then (lazily) the first
/// `YYYY-YYYY` range or `M/D/YYYY` date after it.
static EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Za-z0-9_]+[\sA-Za-z0-9_]+(?:Engineer|Manager|Developer|Designer|Analyst|Architect))[\s\S]*?(?:[0-9]{4}-[0-9]{4}|[0-9]{1,2}/[0-9]{1,2}/[0-9]{4})",
    )
    .expect("experience pattern is valid")
});

// TODO: compute the duration from the matched range/date instead of a
// constant; scoring sums these, so every entry counts as three years.
pub const PLACEHOLDER_DURATION_YEARS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Find experience entries in resume text, in order of appearance.
pub fn parse_experience(text: &str) -> Vec<ExperienceEntry> {
    EXPERIENCE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1)?;
            Some(ExperienceEntry {
                title: title.as_str().trim().to_string(),
                duration_years: PLACEHOLDER_DURATION_YEARS,
                raw_text: whole.as_str().to_string(),
            })
        })
        .collect()
}

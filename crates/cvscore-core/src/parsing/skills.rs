use crate::dictionary::SkillDictionary;
use crate::model::SkillRecord;
use tracing::trace;

// TODO: derive confidence from match count and section once a confidence
// model exists; every detected skill currently gets the same value.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.8;

/// Detect dictionary skills in resume text.
///
/// A skill is reported once, in dictionary order, if any of its surface
/// patterns matches. Skills with no matching pattern contribute nothing.
pub fn extract_skills(text: &str, dictionary: &SkillDictionary) -> Vec<SkillRecord> {
    let mut found = Vec::new();

    for skill in dictionary.skills() {
        let matched = skill.patterns.iter().filter(|p| p.is_match(text)).count();
        if matched == 0 {
            continue;
        }
        trace!(skill = %skill.name, patterns = matched, "skill detected");
        found.push(SkillRecord {
            name: skill.name.clone(),
            category: skill.category,
            confidence: PLACEHOLDER_CONFIDENCE,
        });
    }

    found
}

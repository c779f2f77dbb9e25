use crate::model::SkillCategory;
use serde::{Deserialize, Serialize};

/// A skill dictionary: canonical skill names and the surface forms that
/// identify them in resume text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDictionaryDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub skills: Vec<SkillDef>,
}

/// A single skill entry within a dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    /// Canonical skill name reported in `SkillRecord::name`.
    pub name: String,
    pub category: SkillCategory,
    /// Case-insensitive regular expressions; any match detects the skill.
    pub patterns: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

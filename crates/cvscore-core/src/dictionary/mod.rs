pub mod builtin;
pub mod schema;

use crate::error::ScreeningError;
use crate::model::SkillCategory;
use regex::{Regex, RegexBuilder};
use schema::SkillDictionaryDef;
use std::collections::HashSet;
use std::path::Path;

/// A validated skill dictionary with its patterns compiled.
///
/// Immutable once built; share it behind an `Arc` across screenings.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    def: SkillDictionaryDef,
    skills: Vec<CompiledSkill>,
}

#[derive(Debug, Clone)]
pub struct CompiledSkill {
    pub name: String,
    pub category: SkillCategory,
    pub patterns: Vec<Regex>,
}

impl SkillDictionary {
    /// Validate and compile a dictionary definition.
    pub fn compile(def: SkillDictionaryDef) -> Result<SkillDictionary, ScreeningError> {
        validate_dictionary(&def)?;

        let mut skills = Vec::with_capacity(def.skills.len());
        for skill in &def.skills {
            let patterns = skill
                .patterns
                .iter()
                .map(|p| compile_pattern(&skill.name, p))
                .collect::<Result<Vec<_>, _>>()?;
            skills.push(CompiledSkill {
                name: skill.name.clone(),
                category: skill.category,
                patterns,
            });
        }

        Ok(SkillDictionary { def, skills })
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn version(&self) -> &str {
        &self.def.version
    }

    pub fn skills(&self) -> &[CompiledSkill] {
        &self.skills
    }

    /// The definition this dictionary was compiled from.
    pub fn definition(&self) -> &SkillDictionaryDef {
        &self.def
    }
}

/// Load a skill dictionary from a JSON file.
pub fn load_dictionary(path: &Path) -> Result<SkillDictionary, ScreeningError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScreeningError::DictionaryLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_dictionary(&content, path)
}

/// Parse a skill dictionary from a JSON string.
pub fn parse_dictionary(json: &str, source: &Path) -> Result<SkillDictionary, ScreeningError> {
    let def: SkillDictionaryDef =
        serde_json::from_str(json).map_err(|e| ScreeningError::DictionaryLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    SkillDictionary::compile(def)
}

/// Parse a skill dictionary from a JSON string (no file path context).
pub fn parse_dictionary_str(json: &str) -> Result<SkillDictionary, ScreeningError> {
    let def: SkillDictionaryDef = serde_json::from_str(json).map_err(ScreeningError::Json)?;
    SkillDictionary::compile(def)
}

/// Validate that a dictionary definition is well-formed.
pub fn validate_dictionary(def: &SkillDictionaryDef) -> Result<(), ScreeningError> {
    if def.name.trim().is_empty() {
        return Err(ScreeningError::DictionaryInvalid(
            "dictionary name must not be empty".into(),
        ));
    }

    if def.skills.is_empty() {
        return Err(ScreeningError::DictionaryInvalid(
            "skills must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for skill in &def.skills {
        if skill.name.trim().is_empty() {
            return Err(ScreeningError::DictionaryInvalid(
                "skill name must not be empty".into(),
            ));
        }

        if !seen.insert(skill.name.to_lowercase()) {
            return Err(ScreeningError::DictionaryInvalid(format!(
                "skill '{}' is defined more than once",
                skill.name
            )));
        }

        if skill.patterns.is_empty() {
            return Err(ScreeningError::DictionaryInvalid(format!(
                "skill '{}' has no patterns",
                skill.name
            )));
        }

        for pattern in &skill.patterns {
            if pattern.is_empty() {
                return Err(ScreeningError::DictionaryInvalid(format!(
                    "skill '{}' has an empty pattern",
                    skill.name
                )));
            }
            compile_pattern(&skill.name, pattern)?;
        }
    }

    Ok(())
}

fn compile_pattern(skill: &str, pattern: &str) -> Result<Regex, ScreeningError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            ScreeningError::DictionaryInvalid(format!(
                "skill '{skill}' has an invalid pattern '{pattern}': {e}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_dictionary() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "skills": [
                { "name": "Rust", "category": "technical", "patterns": ["\\brust\\b", "cargo"] },
                { "name": "Mentoring", "category": "soft", "patterns": ["mentor"] }
            ]
        }"#;
        let dict = parse_dictionary_str(json).unwrap();
        assert_eq!(dict.name(), "Test");
        assert_eq!(dict.skills().len(), 2);
        assert_eq!(dict.skills()[0].patterns.len(), 2);
        assert_eq!(dict.skills()[1].category, SkillCategory::Soft);
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "skills": [{ "name": "AWS", "category": "technical", "patterns": ["aws"] }]
        }"#;
        let dict = parse_dictionary_str(json).unwrap();
        assert!(dict.skills()[0].patterns[0].is_match("Deployed on AWS Lambda"));
    }

    #[test]
    fn test_empty_skills_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "skills": [] }"#;
        assert!(matches!(
            parse_dictionary_str(json),
            Err(ScreeningError::DictionaryInvalid(_))
        ));
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "skills": [
                { "name": "SQL", "category": "technical", "patterns": ["sql"] },
                { "name": "sql", "category": "technical", "patterns": ["mysql"] }
            ]
        }"#;
        assert!(parse_dictionary_str(json).is_err());
    }

    #[test]
    fn test_skill_without_patterns_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "skills": [{ "name": "Go", "category": "technical", "patterns": [] }]
        }"#;
        assert!(parse_dictionary_str(json).is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "skills": [{ "name": "Broken", "category": "technical", "patterns": ["(unclosed"] }]
        }"#;
        let err = parse_dictionary_str(json).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "skills": [{ "name": "Go", "category": "hard", "patterns": ["golang"] }]
        }"#;
        assert!(matches!(
            parse_dictionary_str(json),
            Err(ScreeningError::Json(_))
        ));
    }

    #[test]
    fn test_load_dictionary_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "File", "version": "2", "skills": [{{ "name": "Docker", "category": "technical", "patterns": ["docker"] }}] }}"#
        )
        .unwrap();
        let dict = load_dictionary(file.path()).unwrap();
        assert_eq!(dict.version(), "2");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dictionary(Path::new("/nonexistent/skills.json")).unwrap_err();
        assert!(matches!(err, ScreeningError::DictionaryLoad { .. }));
    }
}

use crate::dictionary::schema::SkillDictionaryDef;
use crate::dictionary::SkillDictionary;
use crate::error::ScreeningError;

const DEFAULT_SKILLS_JSON: &str = include_str!("../../../../skills/default.json");
const EXTENDED_SKILLS_JSON: &str = include_str!("../../../../skills/extended.json");

/// Available predefined skill dictionaries.
pub const PRESETS: &[&str] = &["default", "extended"];

/// Load the definition of a predefined dictionary by name.
pub fn load_preset_def(name: &str) -> Result<SkillDictionaryDef, ScreeningError> {
    let json = match name {
        "default" => DEFAULT_SKILLS_JSON,
        "extended" => EXTENDED_SKILLS_JSON,
        _ => {
            return Err(ScreeningError::DictionaryInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    Ok(serde_json::from_str(json)?)
}

/// Load and compile a predefined dictionary by name.
pub fn load_preset(name: &str) -> Result<SkillDictionary, ScreeningError> {
    SkillDictionary::compile(load_preset_def(name)?)
}

use cvscore_core::dictionary::{builtin, load_dictionary, SkillDictionary};
use cvscore_core::error::ScreeningError;
use cvscore_core::model::SkillCategory;
use cvscore_core::scoring::skills_similar;
use std::path::Path;

pub fn list() -> Result<(), ScreeningError> {
    println!("Available predefined skill dictionaries:\n");
    for name in builtin::PRESETS {
        let dict = builtin::load_preset_def(name)?;
        println!(
            "  {:<10} {} (v{}) [{} skills]",
            name,
            dict.name,
            dict.version,
            dict.skills.len()
        );
        if let Some(ref desc) = dict.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), ScreeningError> {
    let dict = builtin::load_preset(preset)?;
    let def = dict.definition();

    println!("{} (version {})\n", def.name, def.version);

    if let Some(ref desc) = def.description {
        println!("{}\n", desc);
    }

    println!(
        "A skill is detected when any of its patterns occurs anywhere in the"
    );
    println!("resume text, ignoring case. Each skill is reported once.\n");

    for category in [SkillCategory::Technical, SkillCategory::Soft] {
        let skills: Vec<_> = def
            .skills
            .iter()
            .filter(|s| s.category == category)
            .collect();
        if skills.is_empty() {
            continue;
        }

        println!("{} skills:\n", capitalize(&category.to_string()));

        let max_name_len = skills.iter().map(|s| s.name.len()).max().unwrap_or(10);
        for skill in skills {
            print!(
                "  {:<width$}  {}",
                skill.name,
                skill.patterns.join(", "),
                width = max_name_len
            );
            if let Some(ref note) = skill.note {
                print!("  ({})", note);
            }
            println!();
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), ScreeningError> {
    print!(
        r#"JSON Skill Dictionary Schema
============================

A skill dictionary maps canonical skill names to the text patterns that
identify them in a resume. When you run `cvscore parse` or `cvscore score`,
every skill whose patterns match the resume text is added to the profile.

Top-level fields:
  name          (string, required)  Human-readable name of the dictionary
  description   (string, optional)  What this dictionary is for
  version       (string, required)  Version identifier (e.g., "1.0")
  skills        (array, required)   List of skills (see below)

Each entry in the "skills" array:
  name          (string, required)  Canonical skill name. Must be unique
                                    (case-insensitive) within the dictionary.
                                    Job requirements refer to skills by
                                    this name.
  category      (string, required)  "technical" or "soft"
  patterns      (array, required)   Regular expressions, matched
                                    case-insensitively anywhere in the text.
                                    Patterns are substring matches: "java"
                                    also matches "javascript". Use "\\b"
                                    for word boundaries.
  note          (string, optional)  Free-form remark shown by
                                    `cvscore skills explain`.

Example:
{{
  "name": "Data team",
  "description": "Skills for data engineering roles",
  "version": "1.0",
  "skills": [
    {{
      "name": "Spark",
      "category": "technical",
      "patterns": ["spark", "pyspark"]
    }},
    {{
      "name": "Go",
      "category": "technical",
      "patterns": ["\\bgolang\\b", "\\bgo\\b"],
      "note": "word boundaries avoid matching 'good'"
    }},
    {{
      "name": "Mentoring",
      "category": "soft",
      "patterns": ["mentor", "coaching"]
    }}
  ]
}}

Job requirements file (used with `--job`):
{{
  "requiredSkills": ["Spark", "Python"],
  "yearsRequired": 3,
  "educationLevel": "bachelor",
  "requiredCerts": [],
  "weights": {{ "skills": 0.5, "experience": 0.25, "education": 0.15, "certifications": 0.1 }}
}}

"weights" is optional; weights are used as given, without normalization.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ScreeningError> {
    let dict = load_dictionary(file)?;

    println!(
        "Skill dictionary '{}' (v{}) is valid.",
        dict.name(),
        dict.version()
    );
    let technical = count(&dict, SkillCategory::Technical);
    println!(
        "  Skills: {} ({} technical, {} soft)",
        dict.skills().len(),
        technical,
        dict.skills().len() - technical
    );

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let skills = dict.skills();
    for (i, a) in skills.iter().enumerate() {
        for b in &skills[i + 1..] {
            if skills_similar(&a.name, &b.name) {
                warnings.push(format!(
                    "skills '{}' and '{}' are treated as equivalent when scoring",
                    a.name, b.name
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn count(dict: &SkillDictionary, category: SkillCategory) -> usize {
    dict.skills()
        .iter()
        .filter(|s| s.category == category)
        .count()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

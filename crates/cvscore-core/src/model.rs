use crate::error::ScreeningError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Declared format of a resume byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Pdf,
    Docx,
    Txt,
}

impl ResumeFormat {
    pub const ALL: [ResumeFormat; 3] = [ResumeFormat::Pdf, ResumeFormat::Docx, ResumeFormat::Txt];

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<ResumeFormat, ScreeningError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ScreeningError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl FromStr for ResumeFormat {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "docx" => Ok(ResumeFormat::Docx),
            "txt" | "text" | "md" => Ok(ResumeFormat::Txt),
            other => Err(ScreeningError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ResumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeFormat::Pdf => write!(f, "pdf"),
            ResumeFormat::Docx => write!(f, "docx"),
            ResumeFormat::Txt => write!(f, "txt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "technical"),
            SkillCategory::Soft => write!(f, "soft"),
        }
    }
}

/// A skill detected in resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Canonical skill name from the dictionary.
    pub name: String,
    pub category: SkillCategory,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
}

/// One job-title phrase followed by a date token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub duration_years: Decimal,
    /// The full matched text, title through date.
    pub raw_text: String,
}

/// Structured data extracted from one resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl CandidateProfile {
    /// Sum of `duration_years` over all experience entries.
    pub fn total_years(&self) -> Decimal {
        self.experience.iter().map(|e| e.duration_years).sum()
    }
}

/// Relative importance of each sub-score in the composite.
///
/// Weights are applied as given; they are not renormalized to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(with = "rust_decimal::serde::float")]
    pub skills: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub experience: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub education: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub certifications: Decimal,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            skills: Decimal::new(5, 1),
            experience: Decimal::new(25, 2),
            education: Decimal::new(15, 2),
            certifications: Decimal::new(1, 1),
        }
    }
}

impl Weights {
    /// Reject negative weights.
    pub fn validate(&self) -> Result<(), ScreeningError> {
        let named = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("certifications", self.certifications),
        ];
        for (name, weight) in named {
            if weight < Decimal::ZERO {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "weight '{name}' must not be negative (got {weight})"
                )));
            }
        }
        Ok(())
    }
}

/// The scoring target a candidate is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub years_required: Decimal,
    /// Free-form: a label, a numeric level or an object.
    #[serde(default)]
    pub education_level: Option<serde_json::Value>,
    #[serde(default)]
    pub required_certs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
}

impl JobRequirements {
    /// Caller-supplied weights, or the defaults when absent.
    pub fn effective_weights(&self) -> Weights {
        self.weights.unwrap_or_default()
    }
}

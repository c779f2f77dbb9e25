use crate::model::{CandidateProfile, Weights};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-factor sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub skills_match: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub experience_match: Decimal,
    /// Constant, not yet data-driven.
    #[serde(with = "rust_decimal::serde::float")]
    pub education_match: Decimal,
    /// Constant, not yet data-driven.
    #[serde(with = "rust_decimal::serde::float")]
    pub certification_match: Decimal,
}

/// Hiring recommendation derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Candidate - Interview Recommended")]
    Strong,
    #[serde(rename = "Medium Candidate - Consider Interview")]
    Medium,
    #[serde(rename = "Weak Candidate - Pool for Future Roles")]
    Weak,
    #[serde(rename = "Below Threshold - Do Not Proceed")]
    BelowThreshold,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Strong => "Strong Candidate - Interview Recommended",
            Recommendation::Medium => "Medium Candidate - Consider Interview",
            Recommendation::Weak => "Weak Candidate - Pool for Future Roles",
            Recommendation::BelowThreshold => "Below Threshold - Do Not Proceed",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one candidate against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Weighted sum of the breakdown, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_score: Decimal,
    pub breakdown: ScoreBreakdown,
    /// The weights actually applied.
    pub weights: Weights,
    pub recommendation: Recommendation,
}

/// A parsed and scored resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    /// Caller-chosen identifier (the CLI uses the file stem).
    pub candidate_id: String,
    pub profile: CandidateProfile,
    pub score: ScoreResult,
}

/// Relative bucket assigned by position in a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "TIER_1 - Interview Immediately")]
    Tier1,
    #[serde(rename = "TIER_2 - Strong Candidate")]
    Tier2,
    #[serde(rename = "TIER_3 - Consider for Interview")]
    Tier3,
    #[serde(rename = "TIER_4 - Pool for Future Roles")]
    Tier4,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Tier1 => write!(f, "TIER_1 - Interview Immediately"),
            Tier::Tier2 => write!(f, "TIER_2 - Strong Candidate"),
            Tier::Tier3 => write!(f, "TIER_3 - Consider for Interview"),
            Tier::Tier4 => write!(f, "TIER_4 - Pool for Future Roles"),
        }
    }
}

/// One row of a candidate ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// 1-based position after sorting by total score.
    pub rank: usize,
    pub candidate_id: String,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_score: Decimal,
    pub recommendation: Recommendation,
    pub tier: Tier,
    /// Human-readable shortfalls against the job requirements.
    pub gaps: Vec<String>,
}

use crate::error::ScreeningError;
use crate::model::{CandidateProfile, ExperienceEntry, JobRequirements, SkillRecord, Weights};
use crate::scoring::outcome::{Recommendation, ScoreBreakdown, ScoreResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use tracing::debug;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

// TODO: score education against `JobRequirements::education_level` once
// education entries are extracted.
pub const EDUCATION_MATCH_PLACEHOLDER: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

// TODO: score certifications against `JobRequirements::required_certs` once
// certifications are extracted.
pub const CERTIFICATION_MATCH_PLACEHOLDER: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Score a candidate profile against job requirements.
///
/// Fails only on invalid requirements: negative weights or a negative
/// years requirement.
pub fn score_candidate(
    candidate: &CandidateProfile,
    job: &JobRequirements,
) -> Result<ScoreResult, ScreeningError> {
    let weights = job.effective_weights();
    weights.validate()?;
    if job.years_required < Decimal::ZERO {
        return Err(ScreeningError::InvalidConfiguration(format!(
            "yearsRequired must not be negative (got {})",
            job.years_required
        )));
    }

    let breakdown = ScoreBreakdown {
        skills_match: score_skills_match(&candidate.skills, &job.required_skills),
        experience_match: score_experience_match(&candidate.experience, job.years_required),
        education_match: score_education_match(&candidate.education, job.education_level.as_ref()),
        certification_match: score_certifications(&candidate.certifications, &job.required_certs),
    };

    let total_score = composite_score(&breakdown, &weights)?;
    let recommendation = recommend(total_score);

    debug!(
        %total_score,
        skills = %breakdown.skills_match,
        experience = %breakdown.experience_match,
        %recommendation,
        "scored candidate"
    );

    Ok(ScoreResult {
        total_score,
        breakdown,
        weights,
        recommendation,
    })
}

/// Weighted sum of the breakdown, rounded half away from zero to 2 places.
///
/// Fails when the weights are too large for the sum to be represented.
pub fn composite_score(
    breakdown: &ScoreBreakdown,
    weights: &Weights,
) -> Result<Decimal, ScreeningError> {
    let terms = [
        (breakdown.skills_match, weights.skills),
        (breakdown.experience_match, weights.experience),
        (breakdown.education_match, weights.education),
        (breakdown.certification_match, weights.certifications),
    ];
    let total = terms
        .iter()
        .try_fold(Decimal::ZERO, |acc, &(score, weight)| {
            score.checked_mul(weight).and_then(|term| acc.checked_add(term))
        })
        .ok_or_else(|| {
            ScreeningError::InvalidConfiguration(format!(
                "weights too large: composite score overflows (skills {}, experience {}, education {}, certifications {})",
                weights.skills, weights.experience, weights.education, weights.certifications
            ))
        })?;
    Ok(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Percentage of required skills matched by any candidate skill.
///
/// No required skills is a vacuous full match.
pub fn score_skills_match(candidate_skills: &[SkillRecord], required: &[String]) -> Decimal {
    if required.is_empty() {
        return HUNDRED;
    }
    let missing = missing_skills(candidate_skills, required).len();
    let matched = required.len() - missing;
    Decimal::from(matched) * HUNDRED / Decimal::from(required.len())
}

/// Required skills with no similar candidate skill, in requirement order.
pub fn missing_skills(candidate_skills: &[SkillRecord], required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|req| {
            !candidate_skills
                .iter()
                .any(|skill| skills_similar(&skill.name, req))
        })
        .cloned()
        .collect()
}

/// Case-insensitive containment in either direction.
///
/// Deliberately loose: "java" is similar to "javascript".
pub fn skills_similar(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// 100 when the summed experience meets the requirement, otherwise the
/// proportion held.
pub fn score_experience_match(experience: &[ExperienceEntry], years_required: Decimal) -> Decimal {
    let total_years: Decimal = experience.iter().map(|e| e.duration_years).sum();
    if total_years >= years_required || years_required <= Decimal::ZERO {
        return HUNDRED;
    }
    total_years.max(Decimal::ZERO) * HUNDRED / years_required
}

pub fn score_education_match(_education: &[String], _required_level: Option<&Value>) -> Decimal {
    EDUCATION_MATCH_PLACEHOLDER
}

pub fn score_certifications(_certifications: &[String], _required: &[String]) -> Decimal {
    CERTIFICATION_MATCH_PLACEHOLDER
}

/// Map a composite score onto a recommendation (inclusive lower bounds).
pub fn recommend(total_score: Decimal) -> Recommendation {
    if total_score >= Decimal::from(85) {
        Recommendation::Strong
    } else if total_score >= Decimal::from(70) {
        Recommendation::Medium
    } else if total_score >= Decimal::from(50) {
        Recommendation::Weak
    } else {
        Recommendation::BelowThreshold
    }
}

pub mod dictionary;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod scoring;

use dictionary::SkillDictionary;
use error::ScreeningError;
use extraction::Extractors;
use model::{CandidateProfile, JobRequirements, ResumeFormat};
use scoring::{RankedCandidate, ScoreResult, Screening};
use std::sync::Arc;
use tracing::info;

/// Main API entry point: extract, parse and score resumes.
///
/// The skill dictionary and extraction backends are fixed at construction.
/// A `Screener` holds no mutable state, so one instance can serve
/// concurrent callers.
pub struct Screener {
    dictionary: Arc<SkillDictionary>,
    extractors: Extractors,
}

impl Screener {
    /// Screener with the default extraction backends.
    pub fn new(dictionary: impl Into<Arc<SkillDictionary>>) -> Self {
        Screener {
            dictionary: dictionary.into(),
            extractors: Extractors::default(),
        }
    }

    pub fn with_extractors(mut self, extractors: Extractors) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn dictionary(&self) -> &SkillDictionary {
        &self.dictionary
    }

    /// Decode resume bytes of the declared format into plain text.
    pub fn extract_text(&self, bytes: &[u8], format: ResumeFormat) -> Result<String, ScreeningError> {
        self.extractors.extract(bytes, format)
    }

    /// Build a candidate profile from already-extracted text.
    pub fn parse_text(&self, text: &str) -> CandidateProfile {
        parsing::parse_profile(text, &self.dictionary)
    }

    /// Extract and parse a resume.
    pub fn parse_resume(
        &self,
        bytes: &[u8],
        format: ResumeFormat,
    ) -> Result<CandidateProfile, ScreeningError> {
        let text = self.extract_text(bytes, format)?;
        Ok(self.parse_text(&text))
    }

    /// Score a candidate profile against job requirements.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
    ) -> Result<ScoreResult, ScreeningError> {
        scoring::score_candidate(candidate, job)
    }

    /// Extract, parse and score one resume.
    pub fn screen_resume(
        &self,
        candidate_id: &str,
        bytes: &[u8],
        format: ResumeFormat,
        job: &JobRequirements,
    ) -> Result<Screening, ScreeningError> {
        let profile = self.parse_resume(bytes, format)?;
        let score = self.score(&profile, job)?;
        info!(
            candidate = candidate_id,
            total_score = %score.total_score,
            recommendation = %score.recommendation,
            "screened resume"
        );
        Ok(Screening {
            candidate_id: candidate_id.to_string(),
            profile,
            score,
        })
    }

    /// Rank screened candidates for one job, best first.
    pub fn rank(&self, screenings: &[Screening], job: &JobRequirements) -> Vec<RankedCandidate> {
        scoring::rank_candidates(screenings, job)
    }
}

pub mod engine;
pub mod outcome;
pub mod ranking;

pub use engine::{recommend, score_candidate, skills_similar};
pub use outcome::{Recommendation, RankedCandidate, ScoreBreakdown, ScoreResult, Screening, Tier};
pub use ranking::rank_candidates;

use crate::model::JobRequirements;
use crate::scoring::engine::missing_skills;
use crate::scoring::outcome::{RankedCandidate, Screening, Tier};

/// Rank screened candidates for one job, best first.
///
/// Candidates are sorted by total score (ties keep their input order) and
/// bucketed by position: the top 10% (at least one) are tier 1, the next
/// 20% tier 2, the next 30% tier 3 and the rest tier 4.
pub fn rank_candidates(screenings: &[Screening], job: &JobRequirements) -> Vec<RankedCandidate> {
    let mut ordered: Vec<&Screening> = screenings.iter().collect();
    ordered.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));

    let total = ordered.len();
    let tier1 = (total / 10).max(1);
    let tier2 = total * 2 / 10;
    let tier3 = total * 3 / 10;

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, s)| {
            let tier = if idx < tier1 {
                Tier::Tier1
            } else if idx < tier1 + tier2 {
                Tier::Tier2
            } else if idx < tier1 + tier2 + tier3 {
                Tier::Tier3
            } else {
                Tier::Tier4
            };

            RankedCandidate {
                rank: idx + 1,
                candidate_id: s.candidate_id.clone(),
                name: s.profile.name.clone(),
                total_score: s.score.total_score,
                recommendation: s.score.recommendation,
                tier,
                gaps: identify_gaps(s, job),
            }
        })
        .collect()
}

/// Shortfalls of one candidate against the job requirements.
pub fn identify_gaps(screening: &Screening, job: &JobRequirements) -> Vec<String> {
    let mut gaps = Vec::new();

    let missing = missing_skills(&screening.profile.skills, &job.required_skills);
    if !missing.is_empty() {
        gaps.push(format!("Missing skills: {}", missing.join(", ")));
    }

    if screening.profile.total_years() < job.years_required {
        gaps.push("Below required experience level".to_string());
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CandidateProfile, SkillCategory, SkillRecord, Weights};
    use crate::scoring::outcome::{Recommendation, ScoreBreakdown, ScoreResult};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn screening(id: &str, total: Decimal) -> Screening {
        Screening {
            candidate_id: id.to_string(),
            profile: CandidateProfile::default(),
            score: ScoreResult {
                total_score: total,
                breakdown: ScoreBreakdown {
                    skills_match: dec!(0),
                    experience_match: dec!(0),
                    education_match: dec!(80),
                    certification_match: dec!(70),
                },
                weights: Weights::default(),
                recommendation: crate::scoring::recommend(total),
            },
        }
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let input = vec![
            screening("a", dec!(60)),
            screening("b", dec!(90)),
            screening("c", dec!(60)),
        ];
        let ranked = rank_candidates(&input, &JobRequirements::default());
        let ids: Vec<&str> = ranked.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].recommendation, Recommendation::Strong);
    }

    #[test]
    fn test_tier_distribution_for_ten() {
        let input: Vec<Screening> = (0..10)
            .map(|i| screening(&format!("c{i}"), Decimal::from(100 - i)))
            .collect();
        let tiers: Vec<Tier> = rank_candidates(&input, &JobRequirements::default())
            .into_iter()
            .map(|r| r.tier)
            .collect();
        assert_eq!(
            tiers,
            vec![
                Tier::Tier1,
                Tier::Tier2,
                Tier::Tier2,
                Tier::Tier3,
                Tier::Tier3,
                Tier::Tier3,
                Tier::Tier4,
                Tier::Tier4,
                Tier::Tier4,
                Tier::Tier4,
            ]
        );
    }

    #[test]
    fn test_small_pool_always_has_a_tier_one() {
        let ranked = rank_candidates(
            &[screening("x", dec!(40)), screening("y", dec!(20))],
            &JobRequirements::default(),
        );
        assert_eq!(ranked[0].tier, Tier::Tier1);
        assert_eq!(ranked[1].tier, Tier::Tier4);
    }

    #[test]
    fn test_empty_pool() {
        assert!(rank_candidates(&[], &JobRequirements::default()).is_empty());
    }

    #[test]
    fn test_gaps() {
        let mut s = screening("g", dec!(55));
        s.profile.skills.push(SkillRecord {
            name: "Python".into(),
            category: SkillCategory::Technical,
            confidence: 0.8,
        });
        let job = JobRequirements {
            required_skills: vec!["Python".into(), "AWS".into(), "Go".into()],
            years_required: dec!(2),
            ..Default::default()
        };
        assert_eq!(
            identify_gaps(&s, &job),
            vec![
                "Missing skills: AWS, Go".to_string(),
                "Below required experience level".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_gaps() {
        let s = screening("ok", dec!(94));
        assert!(identify_gaps(&s, &JobRequirements::default()).is_empty());
    }
}

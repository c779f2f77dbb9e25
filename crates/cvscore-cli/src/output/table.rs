use cvscore_core::model::{CandidateProfile, JobRequirements, SkillCategory};
use cvscore_core::scoring::engine::missing_skills;
use cvscore_core::scoring::{RankedCandidate, Screening};

pub fn print_profile(profile: &CandidateProfile) {
    println!("  Name:   {}", profile.name.as_deref().unwrap_or("-"));
    println!("  Email:  {}", profile.email.as_deref().unwrap_or("-"));
    println!("  Phone:  {}", profile.phone.as_deref().unwrap_or("-"));
    println!();

    let technical = skill_names(profile, SkillCategory::Technical);
    let soft = skill_names(profile, SkillCategory::Soft);
    println!("  Technical skills: {}", or_dash(&technical));
    println!("  Soft skills:      {}", or_dash(&soft));
    println!();

    if profile.experience.is_empty() {
        println!("  Experience: -");
    } else {
        println!(
            "  Experience ({} years total):",
            profile.total_years().normalize()
        );
        let max_title = profile
            .experience
            .iter()
            .map(|e| e.title.len())
            .max()
            .unwrap_or(10);
        for entry in &profile.experience {
            println!(
                "    {:<width$}  {} yrs",
                entry.title,
                entry.duration_years.normalize(),
                width = max_title
            );
        }
    }
}

pub fn print_screening(screening: &Screening, job: &JobRequirements, verbose: bool) {
    let score = &screening.score;
    println!("=== {} ===\n", screening.candidate_id);
    println!(
        "  Overall: {} ({})\n",
        score.total_score.normalize(),
        score.recommendation
    );

    let b = &score.breakdown;
    let w = &score.weights;
    println!("  {:<16}  {:>7}  {:>6}", "Component", "Score", "Weight");
    println!("  {}", "-".repeat(33));
    for (label, value, weight) in [
        ("Skills", b.skills_match, w.skills),
        ("Experience", b.experience_match, w.experience),
        ("Education", b.education_match, w.education),
        ("Certifications", b.certification_match, w.certifications),
    ] {
        println!(
            "  {:<16}  {:>7}  {:>6}",
            label,
            value.round_dp(2).normalize().to_string(),
            weight.normalize().to_string()
        );
    }
    println!();

    if verbose {
        let missing = missing_skills(&screening.profile.skills, &job.required_skills);
        println!("  Missing skills: {}", or_dash(&missing));
        println!();
        print_profile(&screening.profile);
        println!();
    }
}

pub fn print_ranking(ranked: &[RankedCandidate]) {
    let max_id = ranked
        .iter()
        .map(|r| r.candidate_id.len())
        .max()
        .unwrap_or(10)
        .max("Candidate".len());

    println!(
        "  {:>4}  {:<width$}  {:>7}  {:<32}  Recommendation",
        "Rank",
        "Candidate",
        "Score",
        "Tier",
        width = max_id
    );
    println!("  {}", "-".repeat(4 + max_id + 7 + 32 + 24));

    for r in ranked {
        println!(
            "  {:>4}  {:<width$}  {:>7}  {:<32}  {}",
            r.rank,
            r.candidate_id,
            r.total_score.normalize().to_string(),
            r.tier.to_string(),
            r.recommendation,
            width = max_id
        );
        for gap in &r.gaps {
            println!("  {:>4}  {:<width$}    - {}", "", "", gap, width = max_id);
        }
    }
}

fn skill_names(profile: &CandidateProfile, category: SkillCategory) -> Vec<String> {
    profile
        .skills
        .iter()
        .filter(|s| s.category == category)
        .map(|s| s.name.clone())
        .collect()
}

fn or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

//! Integration tests for the extract → parse → score → rank pipeline.
//!
//! Uses a MockExtractor for the pdf backend so these tests run without
//! poppler-utils.

use cvscore_core::dictionary::builtin::load_preset;
use cvscore_core::dictionary::parse_dictionary_str;
use cvscore_core::error::ScreeningError;
use cvscore_core::extraction::{Extractors, TextExtractor};
use cvscore_core::model::{JobRequirements, ResumeFormat, Weights};
use cvscore_core::scoring::{Recommendation, Tier};
use cvscore_core::Screener;
use rust_decimal_macros::dec;

struct MockExtractor {
    text: &'static str,
}

impl TextExtractor for MockExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, ScreeningError> {
        Ok(self.text.to_string())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct CorruptExtractor;

impl TextExtractor for CorruptExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, ScreeningError> {
        Err(ScreeningError::MalformedInput {
            format: "pdf".into(),
            reason: "xref table not found".into(),
        })
    }

    fn backend_name(&self) -> &str {
        "corrupt"
    }
}

fn screener() -> Screener {
    Screener::new(load_preset("default").unwrap())
}

fn job(skills: &[&str], years: rust_decimal::Decimal) -> JobRequirements {
    JobRequirements {
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        years_required: years,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test 1: Plain-text resume matching every required skill, no experience bar
// ---------------------------------------------------------------------------
#[test]
fn txt_resume_full_skill_match() {
    let screening = screener()
        .screen_resume(
            "jd",
            b"javascript, AWS, team lead",
            ResumeFormat::Txt,
            &job(&["JavaScript", "AWS"], dec!(0)),
        )
        .unwrap();

    let score = &screening.score;
    assert_eq!(score.breakdown.skills_match, dec!(100));
    assert_eq!(score.breakdown.experience_match, dec!(100));
    assert_eq!(score.breakdown.education_match, dec!(80));
    assert_eq!(score.breakdown.certification_match, dec!(70));
    // 100*0.5 + 100*0.25 + 80*0.15 + 70*0.1
    assert_eq!(score.total_score, dec!(94));
    assert_eq!(score.recommendation, Recommendation::Strong);

    let skills: Vec<&str> = screening
        .profile
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(skills, vec!["JavaScript", "Java", "AWS", "Leadership"]);
}

// ---------------------------------------------------------------------------
// Test 2: PDF resume via a mocked backend, partial match and short experience
// ---------------------------------------------------------------------------
#[test]
fn pdf_resume_partial_match() {
    let extractors = Extractors::default().with(
        ResumeFormat::Pdf,
        MockExtractor {
            text: "John Smith\njohn@smith.dev\n\nExperience:\nBackend Developer, Globex, 2019-2022\nPython, Docker",
        },
    );
    let screener = screener().with_extractors(extractors);

    let screening = screener
        .screen_resume(
            "js",
            b"%PDF-1.7",
            ResumeFormat::Pdf,
            &job(&["Python", "Kubernetes"], dec!(6)),
        )
        .unwrap();

    assert_eq!(screening.profile.email.as_deref(), Some("john@smith.dev"));
    assert_eq!(screening.profile.experience.len(), 1);
    assert_eq!(screening.profile.experience[0].title, "Backend Developer");

    let score = &screening.score;
    assert_eq!(score.breakdown.skills_match, dec!(50));
    // one entry counts as 3 years: 3 / 6
    assert_eq!(score.breakdown.experience_match, dec!(50));
    // 25 + 12.5 + 12 + 7
    assert_eq!(score.total_score, dec!(56.5));
    assert_eq!(score.recommendation, Recommendation::Weak);
}

// ---------------------------------------------------------------------------
// Test 3: Custom weights are applied as-is
// ---------------------------------------------------------------------------
#[test]
fn custom_weights_not_renormalized() {
    let mut requirements = job(&["Rust"], dec!(0));
    requirements.weights = Some(Weights {
        skills: dec!(0.4),
        experience: dec!(0.4),
        education: dec!(0.4),
        certifications: dec!(0.4),
    });

    let result = screener()
        .screen_resume("x", b"Rust hobbyist", ResumeFormat::Txt, &requirements)
        .unwrap();

    // 0 + 40 + 32 + 28
    assert_eq!(result.score.total_score, dec!(100));
    assert_eq!(result.score.weights, requirements.weights.unwrap());
}

// ---------------------------------------------------------------------------
// Test 4: Structural failures surface as typed errors
// ---------------------------------------------------------------------------
#[test]
fn malformed_input_is_an_error() {
    let screener = screener();
    let err = screener
        .parse_resume(&[0xC3, 0x28], ResumeFormat::Txt)
        .unwrap_err();
    assert!(matches!(err, ScreeningError::MalformedInput { .. }));

    let corrupt = Screener::new(load_preset("default").unwrap())
        .with_extractors(Extractors::default().with(ResumeFormat::Pdf, CorruptExtractor));
    assert!(corrupt.parse_resume(b"%PDF", ResumeFormat::Pdf).is_err());
}

#[test]
fn unsupported_format_is_an_error() {
    let err = "odt".parse::<ResumeFormat>().unwrap_err();
    assert!(matches!(err, ScreeningError::UnsupportedFormat(_)));
}

// ---------------------------------------------------------------------------
// Test 5: Nothing found is success with an empty profile
// ---------------------------------------------------------------------------
#[test]
fn empty_resume_parses_to_empty_profile() {
    let profile = screener().parse_resume(b"", ResumeFormat::Txt).unwrap();
    assert!(profile.email.is_none());
    assert!(profile.phone.is_none());
    assert!(profile.skills.is_empty());
    assert!(profile.experience.is_empty());
}

// ---------------------------------------------------------------------------
// Test 6: Injected dictionary replaces the builtin one
// ---------------------------------------------------------------------------
#[test]
fn injected_dictionary_drives_skill_detection() {
    let dict = parse_dictionary_str(
        r#"{ "name": "Data", "version": "1", "skills": [
            { "name": "Spark", "category": "technical", "patterns": ["spark", "pyspark"] },
            { "name": "Storytelling", "category": "soft", "patterns": ["storytelling"] }
        ] }"#,
    )
    .unwrap();
    let screener = Screener::new(dict);
    assert_eq!(screener.dictionary().name(), "Data");
    assert_eq!(screener.dictionary().skills().len(), 2);

    let profile = screener.parse_text("PySpark pipelines, Python, data storytelling");
    let names: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
    // Python is not in this dictionary
    assert_eq!(names, vec!["Spark", "Storytelling"]);
}

// ---------------------------------------------------------------------------
// Test 7: Ranking several resumes for one job
// ---------------------------------------------------------------------------
#[test]
fn rank_three_resumes() {
    let screener = screener();
    let requirements = job(&["Python", "AWS", "Docker"], dec!(3));

    let resumes: [(&str, &[u8]); 3] = [
        ("weak", b"Customer support, communication"),
        (
            "strong",
            b"Platform Engineer 2017-2020\nPython, AWS, Docker, Kubernetes",
        ),
        ("middle", b"Python and Docker hobby projects"),
    ];

    let screenings: Vec<_> = resumes
        .iter()
        .map(|(id, bytes)| {
            screener
                .screen_resume(id, bytes, ResumeFormat::Txt, &requirements)
                .unwrap()
        })
        .collect();

    let ranked = screener.rank(&screenings, &requirements);
    let ids: Vec<&str> = ranked.iter().map(|r| r.candidate_id.as_str()).collect();
    assert_eq!(ids, vec!["strong", "middle", "weak"]);

    assert_eq!(ranked[0].tier, Tier::Tier1);
    assert!(ranked[0].gaps.is_empty());
    assert_eq!(ranked[0].total_score, dec!(94));

    assert_eq!(ranked[1].tier, Tier::Tier4);
    assert_eq!(
        ranked[1].gaps,
        vec![
            "Missing skills: AWS".to_string(),
            "Below required experience level".to_string(),
        ]
    );

    assert_eq!(ranked[2].recommendation, Recommendation::BelowThreshold);
}

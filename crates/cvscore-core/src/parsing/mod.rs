pub mod contact;
pub mod education;
pub mod experience;
pub mod skills;

use crate::dictionary::SkillDictionary;
use crate::model::CandidateProfile;
use tracing::debug;

pub use contact::{extract_email, extract_name, extract_phone};
pub use education::{extract_certifications, parse_education};
pub use experience::parse_experience;
pub use skills::extract_skills;

/// Build a candidate profile from plain resume text.
///
/// Every field is extracted independently and best-effort: a field that
/// is not found is left empty, never reported as an error.
pub fn parse_profile(text: &str, dictionary: &SkillDictionary) -> CandidateProfile {
    let profile = CandidateProfile {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        experience: parse_experience(text),
        skills: extract_skills(text, dictionary),
        education: parse_education(text),
        certifications: extract_certifications(text),
    };

    debug!(
        dictionary = dictionary.name(),
        email = profile.email.is_some(),
        phone = profile.phone.is_some(),
        experience = profile.experience.len(),
        skills = profile.skills.len(),
        "parsed candidate profile"
    );

    profile
}

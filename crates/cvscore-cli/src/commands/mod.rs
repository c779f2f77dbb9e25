pub mod parse;
pub mod rank;
pub mod score;
pub mod skills;

use clap::Args;
use cvscore_core::dictionary::{builtin, load_dictionary, SkillDictionary};
use cvscore_core::error::ScreeningError;
use cvscore_core::extraction::plain::{PlainTextExtractor, TextEncoding};
use cvscore_core::extraction::Extractors;
use cvscore_core::model::{JobRequirements, ResumeFormat};
use cvscore_core::Screener;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct DictionaryArgs {
    /// Custom JSON skill dictionary
    #[arg(short, long = "skills", value_name = "FILE")]
    pub skills: Option<PathBuf>,

    /// Predefined skill dictionary: default, extended
    #[arg(short, long = "preset", value_name = "NAME", conflicts_with = "skills")]
    pub preset: Option<String>,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Resume format: pdf, docx or txt (default: from file extension)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Encoding of txt resumes: utf-8, utf-16le, utf-16be, latin1
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,
}

/// Build a screener from the selected dictionary and input options.
pub fn build_screener(
    dictionary: &DictionaryArgs,
    input: &InputArgs,
    config: &Config,
) -> Result<Screener, ScreeningError> {
    let dict = select_dictionary(dictionary, config)?;
    let encoding: TextEncoding = input.encoding.parse()?;
    let extractors =
        Extractors::default().with(ResumeFormat::Txt, PlainTextExtractor::new(encoding));
    let screener = Screener::new(dict).with_extractors(extractors);
    debug!(
        dictionary = screener.dictionary().name(),
        version = screener.dictionary().version(),
        skills = screener.dictionary().skills().len(),
        %encoding,
        "screener ready"
    );
    Ok(screener)
}

fn select_dictionary(
    args: &DictionaryArgs,
    config: &Config,
) -> Result<SkillDictionary, ScreeningError> {
    if let Some(path) = &args.skills {
        return load_dictionary(path);
    }
    if let Some(preset) = &args.preset {
        return builtin::load_preset(preset);
    }
    match &config.skills_path {
        Some(path) => {
            debug!(path = %path.display(), "using dictionary from CVSCORE_SKILLS");
            load_dictionary(path)
        }
        None => builtin::load_preset("default"),
    }
}

/// Read a resume file and resolve its format.
pub fn read_resume(path: &Path, input: &InputArgs) -> Result<(Vec<u8>, ResumeFormat), ScreeningError> {
    let format = match &input.format {
        Some(f) => f.parse()?,
        None => ResumeFormat::from_path(path)?,
    };
    let bytes = std::fs::read(path)?;
    Ok((bytes, format))
}

/// Load job requirements from a JSON file.
pub fn load_job(path: &Path) -> Result<JobRequirements, ScreeningError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Identifier for a resume: its file stem.
pub fn candidate_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

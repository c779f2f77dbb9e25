use cvscore_core::error::ScreeningError;
use std::path::{Path, PathBuf};

use super::{build_screener, read_resume, DictionaryArgs, InputArgs};
use crate::config::Config;
use crate::output;

pub fn run(
    input_file: &Path,
    input: &InputArgs,
    dictionary: &DictionaryArgs,
    config: &Config,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ScreeningError> {
    let screener = build_screener(dictionary, input, config)?;
    let (bytes, format) = read_resume(input_file, input)?;
    let profile = screener.parse_resume(&bytes, format)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&profile)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} skill(s) and {} experience entr{}, written to {}",
                profile.skills.len(),
                profile.experience.len(),
                if profile.experience.len() == 1 { "y" } else { "ies" },
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&profile)?,
            _ => output::table::print_profile(&profile),
        },
    }

    Ok(())
}

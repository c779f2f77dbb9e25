use cvscore_core::error::ScreeningError;
use std::path::{Path, PathBuf};

use super::{build_screener, candidate_id, load_job, read_resume, DictionaryArgs, InputArgs};
use crate::config::Config;
use crate::output;

pub fn run(
    input_files: &[PathBuf],
    job_file: &Path,
    input: &InputArgs,
    dictionary: &DictionaryArgs,
    config: &Config,
    output_format: &str,
) -> Result<(), ScreeningError> {
    let screener = build_screener(dictionary, input, config)?;
    let job = load_job(job_file)?;

    let mut screenings = Vec::with_capacity(input_files.len());
    for path in input_files {
        let (bytes, format) = read_resume(path, input)?;
        screenings.push(screener.screen_resume(&candidate_id(path), &bytes, format, &job)?);
    }

    let ranked = screener.rank(&screenings, &job);

    match output_format {
        "json" => output::json::print(&ranked)?,
        _ => output::table::print_ranking(&ranked),
    }

    Ok(())
}

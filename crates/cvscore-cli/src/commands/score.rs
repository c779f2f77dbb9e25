use cvscore_core::error::ScreeningError;
use std::path::Path;

use super::{build_screener, candidate_id, load_job, read_resume, DictionaryArgs, InputArgs};
use crate::config::Config;
use crate::output;

pub fn run(
    input_file: &Path,
    job_file: &Path,
    input: &InputArgs,
    dictionary: &DictionaryArgs,
    config: &Config,
    output_format: &str,
    verbose: bool,
) -> Result<(), ScreeningError> {
    let screener = build_screener(dictionary, input, config)?;
    let job = load_job(job_file)?;
    let (bytes, format) = read_resume(input_file, input)?;

    let screening = screener.screen_resume(&candidate_id(input_file), &bytes, format, &job)?;

    match output_format {
        "json" => output::json::print(&screening)?,
        _ => output::table::print_screening(&screening, &job, verbose),
    }

    Ok(())
}

use std::path::PathBuf;

/// CLI configuration loaded from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive, e.g. `warn` or `cvscore_core=debug`.
    pub log_filter: String,
    /// Skill dictionary used when neither `--skills` nor `--preset` is given.
    pub skills_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            log_filter: std::env::var("CVSCORE_LOG").unwrap_or_else(|_| "warn".to_string()),
            skills_path: std::env::var_os("CVSCORE_SKILLS")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

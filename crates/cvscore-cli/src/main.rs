mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::{DictionaryArgs, InputArgs};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "cvscore",
    version,
    about = "Resume screening: extract, parse and score candidates against a job"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume (PDF, DOCX or TXT) into a candidate profile (without scoring)
    Parse {
        /// Path to resume file
        input_file: PathBuf,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the parsed profile to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Score a resume against job requirements
    Score {
        /// Path to resume file
        input_file: PathBuf,

        /// Job requirements JSON file
        #[arg(short, long, value_name = "JOB")]
        job: PathBuf,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the parsed profile and missing skills
        #[arg(long)]
        verbose: bool,
    },
    /// Score several resumes against one job and rank them
    Rank {
        /// Paths to resume files
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Job requirements JSON file
        #[arg(short, long, value_name = "JOB")]
        job: PathBuf,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect skill dictionaries
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },
}

#[derive(Subcommand)]
enum SkillsAction {
    /// List predefined skill dictionaries
    List,
    /// Explain a skill dictionary in plain language
    Explain {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom skill dictionary file
    Validate {
        /// Path to JSON dictionary file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = config::Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            input,
            dictionary,
            output,
            out,
        } => commands::parse::run(&input_file, &input, &dictionary, &config, &output, out),
        Commands::Score {
            input_file,
            job,
            input,
            dictionary,
            output,
            verbose,
        } => commands::score::run(&input_file, &job, &input, &dictionary, &config, &output, verbose),
        Commands::Rank {
            input_files,
            job,
            input,
            dictionary,
            output,
        } => commands::rank::run(&input_files, &job, &input, &dictionary, &config, &output),
        Commands::Skills { action } => match action {
            SkillsAction::List => commands::skills::list(),
            SkillsAction::Explain { preset } => commands::skills::explain(&preset),
            SkillsAction::Schema => commands::skills::schema(),
            SkillsAction::Validate { file } => commands::skills::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

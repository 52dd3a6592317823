use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edcellence")]
#[command(about = "ADLI/LeTCI excellence assessment scoring for education organizations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one assessment input file
    Assess {
        /// Assessment input (.json or .toml)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .edcellence.toml)
        #[arg(short, long, env = "EDCELLENCE_CONFIG")]
        config: Option<PathBuf>,

        /// Show only top N improvement priorities
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score several departments from one batch file in parallel
    Batch {
        /// Batch input with a `departments` array (.json or .toml)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .edcellence.toml)
        #[arg(short, long, env = "EDCELLENCE_CONFIG")]
        config: Option<PathBuf>,

        /// Show only top N improvement priorities per department
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Exit with an error if any department fails
        #[arg(long = "strict")]
        strict: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Show the maturity level of a score
    Classify {
        /// Organizational score in [0, 100]
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

impl Commands {
    /// Verbosity requested by the command, if it takes one.
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Assess { verbosity, .. } | Commands::Batch { verbosity, .. } => *verbosity,
            Commands::Classify { .. } | Commands::Init { .. } => 0,
        }
    }
}

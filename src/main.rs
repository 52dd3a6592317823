use anyhow::Result;
use clap::Parser;
use edcellence::cli::{Cli, Commands};
use edcellence::commands::{self, AssessConfig, BatchConfig};
use edcellence::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Assess {
            file,
            format,
            output,
            config,
            top,
            verbosity: _,
        } => commands::handle_assess(AssessConfig {
            file,
            format,
            output,
            config,
            top,
        }),
        Commands::Batch {
            file,
            format,
            output,
            config,
            top,
            jobs,
            strict,
            verbosity: _,
        } => commands::handle_batch(BatchConfig {
            file,
            format,
            output,
            config,
            top,
            jobs,
            strict,
        }),
        Commands::Classify { score } => commands::handle_classify(score),
        Commands::Init { force } => commands::init_config(force),
    }
}

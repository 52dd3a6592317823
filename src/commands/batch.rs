use crate::cli::OutputFormat;
use crate::engine::AssessmentEngine;
use crate::io::{create_writer, load_batch};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

pub struct BatchConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
    pub jobs: usize,
    pub strict: bool,
}

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        warn!("Thread pool already configured: {e}");
    }
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    configure_thread_pool(config.jobs);

    let settings = super::resolve_config(config.config.as_deref())?;
    let departments = load_batch(&config.file)?;
    info!(
        file = %config.file.display(),
        departments = departments.len(),
        "Loaded batch input"
    );

    let outcomes = AssessmentEngine::from_config(&settings).assess_departments(&departments);
    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|o| o.outcome.is_err())
        .map(|o| o.name.as_str())
        .collect();
    for outcome in &outcomes {
        if let Err(err) = &outcome.outcome {
            warn!(department = %outcome.name, code = %err.code(), "{err}");
        }
    }

    let mut output = super::open_output(config.output.as_deref())?;
    create_writer(config.format.into(), &mut output, config.top).write_batch(&outcomes)?;
    output.flush()?;

    if config.strict && !failed.is_empty() {
        anyhow::bail!(
            "{} of {} departments failed: {}",
            failed.len(),
            outcomes.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

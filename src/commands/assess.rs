use crate::cli::OutputFormat;
use crate::engine::AssessmentEngine;
use crate::io::{create_writer, load_assessment};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub struct AssessConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
}

pub fn handle_assess(config: AssessConfig) -> Result<()> {
    let settings = super::resolve_config(config.config.as_deref())?;
    let input = load_assessment(&config.file)?;
    info!(
        file = %config.file.display(),
        items = input.len(),
        "Loaded assessment input"
    );

    let result = AssessmentEngine::from_config(&settings)
        .assess(&input)
        .with_context(|| format!("Assessment of {} failed", config.file.display()))?;

    let mut output = super::open_output(config.output.as_deref())?;
    create_writer(config.format.into(), &mut output, config.top).write_assessment(&result)?;
    output.flush()?;
    Ok(())
}

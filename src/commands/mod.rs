//! CLI command implementations.
//!
//! Available commands:
//! - **assess**: Score one assessment input file
//! - **batch**: Score several departments in parallel
//! - **classify**: Show the maturity level of a score
//! - **init**: Write a default `.edcellence.toml`

pub mod assess;
pub mod batch;
pub mod classify;
pub mod init;

pub use assess::{handle_assess, AssessConfig};
pub use batch::{handle_batch, BatchConfig};
pub use classify::handle_classify;
pub use init::init_config;

use crate::config::{load_config, load_config_from_path, EdcellenceConfig};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Load an explicit configuration file, or search from the current directory.
pub fn resolve_config(config: Option<&Path>) -> Result<EdcellenceConfig> {
    match config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    }
}

/// Open the report destination: a file when given, stdout otherwise.
pub fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

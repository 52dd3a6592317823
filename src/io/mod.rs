pub mod input;
pub mod output;

pub use input::{load_assessment, load_batch, parse_assessment, parse_batch, InputFormat};
pub use output::{
    create_writer, JsonWriter, MarkdownWriter, OutputFormat, ReportWriter, TerminalWriter,
};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

//! Assessment input files.
//!
//! A single assessment is a table with `process_items`, `results_items` and
//! an optional `category_point_allocations` map. A batch file wraps several
//! of those in a `departments` array, each with a `name`. JSON and TOML are
//! both accepted; the file extension selects the parser.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::{Item, ItemIndicators, ProcessIndicators, ResultsIndicators};
use crate::engine::{AssessmentInput, Department};

/// Input file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => bail!(
                "Unsupported input extension '.{ext}' for {} (expected .json or .toml)",
                path.display()
            ),
            None => bail!(
                "Input file {} has no extension (expected .json or .toml)",
                path.display()
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem<I> {
    item_id: String,
    category: String,
    indicators: I,
    point_value: u32,
    #[serde(default)]
    deployment_gap: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAssessment {
    #[serde(default)]
    process_items: Vec<RawItem<ProcessIndicators>>,
    #[serde(default)]
    results_items: Vec<RawItem<ResultsIndicators>>,
    #[serde(default)]
    category_point_allocations: BTreeMap<String, Vec<u32>>,
}

// Same fields as `RawAssessment` plus `name`; serde cannot combine
// `flatten` with `deny_unknown_fields`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDepartment {
    name: String,
    #[serde(default)]
    process_items: Vec<RawItem<ProcessIndicators>>,
    #[serde(default)]
    results_items: Vec<RawItem<ResultsIndicators>>,
    #[serde(default)]
    category_point_allocations: BTreeMap<String, Vec<u32>>,
}

impl RawDepartment {
    fn into_department(self) -> Result<Department> {
        let name = self.name;
        let input = RawAssessment {
            process_items: self.process_items,
            results_items: self.results_items,
            category_point_allocations: self.category_point_allocations,
        }
        .into_input()
        .with_context(|| format!("Invalid department {name}"))?;
        Ok(Department::new(name, input))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBatch {
    departments: Vec<RawDepartment>,
}

fn build_item<I>(raw: RawItem<I>, wrap: fn(I) -> ItemIndicators) -> Result<Item> {
    let item_id = raw.item_id;
    Item::new(
        item_id.clone(),
        raw.category,
        wrap(raw.indicators),
        raw.point_value,
        raw.deployment_gap,
    )
    .with_context(|| format!("Invalid item {item_id}"))
}

impl RawAssessment {
    fn into_input(self) -> Result<AssessmentInput> {
        let mut input = AssessmentInput::new();
        for raw in self.process_items {
            input.add_item(build_item(raw, ItemIndicators::Process)?);
        }
        for raw in self.results_items {
            input.add_item(build_item(raw, ItemIndicators::Results)?);
        }
        Ok(self
            .category_point_allocations
            .into_iter()
            .fold(input, |input, (category, points)| {
                input.with_allocation(category, points)
            }))
    }
}

fn deserialize<T: for<'de> Deserialize<'de>>(contents: &str, format: InputFormat) -> Result<T> {
    match format {
        InputFormat::Json => serde_json::from_str(contents).context("Failed to parse JSON input"),
        InputFormat::Toml => toml::from_str(contents).context("Failed to parse TOML input"),
    }
}

/// Parse a single assessment.
pub fn parse_assessment(contents: &str, format: InputFormat) -> Result<AssessmentInput> {
    deserialize::<RawAssessment>(contents, format)?.into_input()
}

/// Parse a multi-department batch.
pub fn parse_batch(contents: &str, format: InputFormat) -> Result<Vec<Department>> {
    let batch: RawBatch = deserialize(contents, format)?;
    batch
        .departments
        .into_iter()
        .map(RawDepartment::into_department)
        .collect()
}

fn read_input(path: &Path) -> Result<(String, InputFormat)> {
    let format = InputFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok((contents, format))
}

/// Load a single assessment from a `.json` or `.toml` file.
pub fn load_assessment(path: &Path) -> Result<AssessmentInput> {
    let (contents, format) = read_input(path)?;
    parse_assessment(&contents, format).with_context(|| format!("In {}", path.display()))
}

/// Load a department batch from a `.json` or `.toml` file.
pub fn load_batch(path: &Path) -> Result<Vec<Department>> {
    let (contents, format) = read_input(path)?;
    parse_batch(&contents, format).with_context(|| format!("In {}", path.display()))
}

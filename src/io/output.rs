use crate::engine::{AssessmentResult, DepartmentAssessment};
use crate::priority::{take_top, RankedGap};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_assessment(&mut self, result: &AssessmentResult) -> anyhow::Result<()>;
    fn write_batch(&mut self, outcomes: &[DepartmentAssessment]) -> anyhow::Result<()>;
}

/// Serializable view of one batch entry.
#[derive(Serialize)]
struct BatchEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a AssessmentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<BatchError>,
}

#[derive(Serialize)]
struct BatchError {
    code: &'static str,
    message: String,
}

impl<'a> From<&'a DepartmentAssessment> for BatchEntry<'a> {
    fn from(outcome: &'a DepartmentAssessment) -> Self {
        match &outcome.outcome {
            Ok(result) => Self {
                name: &outcome.name,
                result: Some(result),
                error: None,
            },
            Err(err) => Self {
                name: &outcome.name,
                result: None,
                error: Some(BatchError {
                    code: err.code().as_str(),
                    message: err.to_string(),
                }),
            },
        }
    }
}

fn top_gaps(result: &AssessmentResult, top: Option<usize>) -> &[RankedGap] {
    take_top(&result.gap_priorities, top)
}

fn with_top(result: &AssessmentResult, top: Option<usize>) -> AssessmentResult {
    let mut trimmed = result.clone();
    trimmed.gap_priorities.truncate(top_gaps(result, top).len());
    trimmed
}

pub struct JsonWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_assessment(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&with_top(result, self.top))?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_batch(&mut self, outcomes: &[DepartmentAssessment]) -> anyhow::Result<()> {
        let trimmed: Vec<DepartmentAssessment> = outcomes
            .iter()
            .map(|o| DepartmentAssessment {
                name: o.name.clone(),
                outcome: o.outcome.as_ref().map(|r| with_top(r, self.top)).map_err(Clone::clone),
            })
            .collect();
        let entries: Vec<BatchEntry> = trimmed.iter().map(BatchEntry::from).collect();
        let json = serde_json::to_string_pretty(&serde_json::json!({ "departments": entries }))?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Excellence Assessment Report")?;
        writeln!(self.writer)?;
        self.write_summary(result)?;
        self.write_categories(result)?;
        self.write_priorities(result)?;
        Ok(())
    }

    fn write_batch(&mut self, outcomes: &[DepartmentAssessment]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Department Assessment Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Department | Score | Maturity | IHI | Status |")?;
        writeln!(self.writer, "|------------|-------|----------|-----|--------|")?;
        for outcome in outcomes {
            match &outcome.outcome {
                Ok(result) => writeln!(
                    self.writer,
                    "| {} | {:.2} | {} | {:.3} | OK |",
                    outcome.name, result.organizational_score, result.maturity_level, result.ihi
                )?,
                Err(err) => writeln!(
                    self.writer,
                    "| {} | - | - | - | {}: {} |",
                    outcome.name,
                    err.code(),
                    err
                )?,
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_summary(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Organizational Score | {:.2} / 100 |",
            result.organizational_score
        )?;
        writeln!(
            self.writer,
            "| Maturity | {} ({}) |",
            result.maturity_level, result.maturity_level.description
        )?;
        writeln!(
            self.writer,
            "| Integration Health Index | {:.3} ({}) |",
            result.ihi, result.integration_health
        )?;
        writeln!(
            self.writer,
            "| Items | {} process, {} results |",
            result.metadata.process_items_count, result.metadata.results_items_count
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_categories(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Category Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Score | Items | Points |")?;
        writeln!(self.writer, "|----------|-------|-------|--------|")?;
        for category in &result.category_scores {
            writeln!(
                self.writer,
                "| {} | {:.2} | {} | {} |",
                category.category, category.score, category.item_count, category.total_points
            )?;
        }
        writeln!(self.writer)?;

        if !result.metadata.unweighted_categories.is_empty() {
            writeln!(
                self.writer,
                "> Not weighted in the organizational score: {}",
                result.metadata.unweighted_categories.join(", ")
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_priorities(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        let gaps = top_gaps(result, self.top);
        if gaps.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Improvement Priorities")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Item | Priority |")?;
        writeln!(self.writer, "|------|------|----------|")?;
        for (rank, gap) in gaps.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {:.1} |",
                rank + 1,
                gap.item_id,
                gap.priority
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Excellence Assessment Report".bold().blue())?;
        writeln!(self.writer, "{}", "============================".blue())?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "  Organizational score: {} / 100",
            colorize_score(result.organizational_score)
        )?;
        writeln!(
            self.writer,
            "  Maturity: {} ({}-{})",
            result.maturity_level.to_string().bold(),
            result.maturity_level.range.0,
            result.maturity_level.range.1
        )?;
        writeln!(self.writer, "    {}", result.maturity_level.description.dimmed())?;
        writeln!(
            self.writer,
            "  Integration Health Index: {:.3} ({})",
            result.ihi,
            colorize_health(result)
        )?;
        writeln!(
            self.writer,
            "    {}",
            result.integration_health.description().dimmed()
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Category scores:".bold())?;
        writeln!(self.writer, "{}", category_table(result))?;
        if !result.metadata.unweighted_categories.is_empty() {
            writeln!(
                self.writer,
                "  {} not weighted: {}",
                "Note:".yellow(),
                result.metadata.unweighted_categories.join(", ")
            )?;
        }
        writeln!(self.writer)?;

        let gaps = top_gaps(result, self.top);
        if !gaps.is_empty() {
            writeln!(self.writer, "{}", "Improvement priorities:".bold())?;
            writeln!(self.writer, "{}", priority_table(gaps))?;
        }
        Ok(())
    }

    fn write_batch(&mut self, outcomes: &[DepartmentAssessment]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Department Assessment Summary".bold().blue())?;
        writeln!(self.writer, "{}", "=============================".blue())?;
        writeln!(self.writer)?;

        let mut table = new_table(vec!["Department", "Score", "Maturity", "IHI", "Status"]);
        for outcome in outcomes {
            match &outcome.outcome {
                Ok(result) => table.add_row(vec![
                    Cell::new(&outcome.name),
                    Cell::new(format!("{:.2}", result.organizational_score)),
                    Cell::new(result.maturity_level.to_string()),
                    Cell::new(format!("{:.3}", result.ihi)),
                    Cell::new("OK"),
                ]),
                Err(err) => table.add_row(vec![
                    Cell::new(&outcome.name),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new(format!("{}: {}", err.code(), err)),
                ]),
            };
        }
        writeln!(self.writer, "{table}")?;

        let failed = outcomes.iter().filter(|o| o.outcome.is_err()).count();
        let status = if failed == 0 {
            format!("{} departments assessed", outcomes.len()).green()
        } else {
            format!("{failed} of {} departments failed", outcomes.len()).red()
        };
        writeln!(self.writer, "{status}")?;
        Ok(())
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn category_table(result: &AssessmentResult) -> Table {
    let mut table = new_table(vec!["Category", "Score", "Items", "Points"]);
    for category in &result.category_scores {
        table.add_row(vec![
            Cell::new(&category.category),
            Cell::new(format!("{:.2}", category.score)),
            Cell::new(category.item_count),
            Cell::new(category.total_points),
        ]);
    }
    table
}

fn priority_table(gaps: &[RankedGap]) -> Table {
    let mut table = new_table(vec!["Rank", "Item", "Priority"]);
    for (rank, gap) in gaps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&gap.item_id),
            Cell::new(format!("{:.1}", gap.priority)),
        ]);
    }
    table
}

fn colorize_score(score: f64) -> ColoredString {
    let text = format!("{score:.2}");
    match score {
        s if s > 85.0 => text.green().bold(),
        s if s > 60.0 => text.green(),
        s if s > 40.0 => text.yellow(),
        _ => text.red(),
    }
}

fn colorize_health(result: &AssessmentResult) -> ColoredString {
    use crate::scoring::IntegrationHealth;
    let label = result.integration_health.label();
    match result.integration_health {
        IntegrationHealth::Strong => label.green(),
        IntegrationHealth::Moderate => label.yellow(),
        IntegrationHealth::Weak => label.red(),
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    top: Option<usize>,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer, top)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, top)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, top)),
    }
}

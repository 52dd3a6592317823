//! Rubric items: one indicator record plus its rubric weight.

use super::indicators::{check_unit_interval, ProcessIndicators, ResultsIndicators};
use crate::errors::{Result, ScoringError};
use serde::Serialize;

/// Which rubric an item is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Process item scored with ADLI
    Process,
    /// Results item scored with LeTCI
    Results,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Process => write!(f, "process"),
            Self::Results => write!(f, "results"),
        }
    }
}

/// The indicator record carried by an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rubric", rename_all = "snake_case")]
pub enum ItemIndicators {
    Process(ProcessIndicators),
    Results(ResultsIndicators),
}

impl ItemIndicators {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Process(_) => ItemKind::Process,
            Self::Results(_) => ItemKind::Results,
        }
    }

    /// The integration indicator, shared by both rubrics.
    pub fn integration(&self) -> f64 {
        match self {
            Self::Process(p) => p.integration(),
            Self::Results(r) => r.integration(),
        }
    }
}

/// A scored rubric item.
///
/// Point value is at least 1; deployment gap is the fraction of the
/// organization lacking the practice, in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    item_id: String,
    category: String,
    indicators: ItemIndicators,
    point_value: u32,
    deployment_gap: f64,
}

impl Item {
    /// Create a process item with no deployment gap.
    pub fn process(
        item_id: impl Into<String>,
        category: impl Into<String>,
        indicators: ProcessIndicators,
        point_value: u32,
    ) -> Result<Self> {
        Self::new(
            item_id,
            category,
            ItemIndicators::Process(indicators),
            point_value,
            0.0,
        )
    }

    /// Create a results item with no deployment gap.
    pub fn results(
        item_id: impl Into<String>,
        category: impl Into<String>,
        indicators: ResultsIndicators,
        point_value: u32,
    ) -> Result<Self> {
        Self::new(
            item_id,
            category,
            ItemIndicators::Results(indicators),
            point_value,
            0.0,
        )
    }

    pub fn new(
        item_id: impl Into<String>,
        category: impl Into<String>,
        indicators: ItemIndicators,
        point_value: u32,
        deployment_gap: f64,
    ) -> Result<Self> {
        if point_value == 0 {
            return Err(ScoringError::range(
                "point_value",
                0.0,
                1.0,
                f64::from(u32::MAX),
            ));
        }
        Ok(Self {
            item_id: item_id.into(),
            category: category.into(),
            indicators,
            point_value,
            deployment_gap: check_unit_interval("deployment_gap", deployment_gap)?,
        })
    }

    /// Replace the deployment gap, validating the new value.
    pub fn with_deployment_gap(mut self, deployment_gap: f64) -> Result<Self> {
        self.deployment_gap = check_unit_interval("deployment_gap", deployment_gap)?;
        Ok(self)
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn indicators(&self) -> &ItemIndicators {
        &self.indicators
    }

    pub fn kind(&self) -> ItemKind {
        self.indicators.kind()
    }

    pub fn point_value(&self) -> u32 {
        self.point_value
    }

    pub fn deployment_gap(&self) -> f64 {
        self.deployment_gap
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::ItemKind;
use crate::maturity::MaturityLevel;
use crate::priority::RankedGap;
use crate::scoring::IntegrationHealth;

/// Score of a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemScore {
    pub item_id: String,
    pub category: String,
    pub kind: ItemKind,
    pub score: f64,
    pub point_value: u32,
    pub gap_priority: f64,
}

/// Aggregated score of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
    pub item_count: usize,
    pub total_points: u64,
}

/// Run metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentMetadata {
    pub process_items_count: usize,
    pub results_items_count: usize,
    pub total_categories: usize,
    /// Scored categories that carry no weight in the organizational score.
    pub unweighted_categories: Vec<String>,
}

/// Output of one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub organizational_score: f64,
    /// Category scores in order of first appearance.
    pub category_scores: Vec<CategoryScore>,
    pub item_scores: Vec<ItemScore>,
    pub ihi: f64,
    pub integration_health: IntegrationHealth,
    pub gap_priorities: Vec<RankedGap>,
    pub maturity_level: MaturityLevel,
    pub metadata: AssessmentMetadata,
}

impl AssessmentResult {
    /// Category scores keyed by category name.
    pub fn category_score_map(&self) -> BTreeMap<String, f64> {
        self.category_scores
            .iter()
            .map(|c| (c.category.clone(), c.score))
            .collect()
    }

    pub fn category_score(&self, category: &str) -> Option<f64> {
        self.category_scores
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score)
    }

    pub fn item_score(&self, item_id: &str) -> Option<f64> {
        self.item_scores
            .iter()
            .find(|i| i.item_id == item_id)
            .map(|i| i.score)
    }
}

/// Outcome of one department in a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentAssessment {
    pub name: String,
    pub outcome: crate::errors::Result<AssessmentResult>,
}

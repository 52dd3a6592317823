//! Assessment engine: the full scoring pipeline over a set of items.
//!
//! The engine is stateless apart from its weight overrides. One call to
//! [`AssessmentEngine::assess`] runs, in order:
//!
//! 1. item scoring (Equations 1 and 2)
//! 2. the optional category allocation check
//! 3. category aggregation (Equation 3)
//! 4. the organizational score (Equation 4)
//! 5. the Integration Health Index (Equation 5)
//! 6. gap priority ranking (Equation 6)
//! 7. maturity classification
//!
//! Any failing step aborts the run with its [`ScoringError`].

mod input;
mod result;

pub use input::{AssessmentInput, Department};
pub use result::{
    AssessmentMetadata, AssessmentResult, CategoryScore, DepartmentAssessment, ItemScore,
};

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::config::weights::{CategoryWeights, ProcessWeights, ResultsWeights, WeightMap};
use crate::config::EdcellenceConfig;
use crate::core::ItemKind;
use crate::errors::{Result, ScoringError};
use crate::maturity::classify_maturity_level;
use crate::observability::AssessmentPhase;
use crate::priority::{compute_gap_priority_score, rank_improvement_priorities, DEFAULT_TARGET_SCORE};
use crate::scoring::{
    compute_category_score, compute_integration_health_index, compute_organizational_score,
    score_with_validated_weights, unweighted_categories, IntegrationHealth,
};

/// Orchestrates a complete assessment with optional weight overrides.
///
/// # Example
///
/// ```rust
/// use edcellence::core::{Item, ProcessIndicators, ResultsIndicators};
/// use edcellence::config::CategoryWeights;
/// use edcellence::engine::{AssessmentEngine, AssessmentInput};
///
/// let input = AssessmentInput::new()
///     .with_item(Item::process("1.1", "Leadership",
///         ProcessIndicators::new(0.8, 0.75, 0.7, 0.8).unwrap(), 70).unwrap())
///     .with_item(Item::results("7.1", "Results",
///         ResultsIndicators::new(0.85, 0.8, 0.75, 0.85).unwrap(), 120).unwrap());
///
/// let weights = CategoryWeights::from_pairs([("Leadership", 0.4), ("Results", 0.6)]);
/// let engine = AssessmentEngine::new().with_category_weights(weights);
/// let result = engine.assess(&input).unwrap();
/// assert!((0.0..=100.0).contains(&result.organizational_score));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentEngine {
    process_weights: Option<ProcessWeights>,
    results_weights: Option<ResultsWeights>,
    category_weights: Option<CategoryWeights>,
}

#[derive(Default)]
struct CategoryAccumulator {
    scores: Vec<f64>,
    points: Vec<u32>,
}

impl AssessmentEngine {
    /// Engine using the default weight maps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using the weight overrides present in a configuration.
    pub fn from_config(config: &EdcellenceConfig) -> Self {
        Self {
            process_weights: config.process_weights,
            results_weights: config.results_weights,
            category_weights: config.category_weights.clone(),
        }
    }

    pub fn with_process_weights(mut self, weights: ProcessWeights) -> Self {
        self.process_weights = Some(weights);
        self
    }

    pub fn with_results_weights(mut self, weights: ResultsWeights) -> Self {
        self.results_weights = Some(weights);
        self
    }

    pub fn with_category_weights(mut self, weights: CategoryWeights) -> Self {
        self.category_weights = Some(weights);
        self
    }

    /// Validate every weight override, whether or not its rubric is used.
    pub fn validate(&self) -> Result<()> {
        if let Some(weights) = &self.process_weights {
            weights.validate()?;
        }
        if let Some(weights) = &self.results_weights {
            weights.validate()?;
        }
        if let Some(weights) = &self.category_weights {
            weights.validate()?;
        }
        Ok(())
    }

    /// Run the complete assessment pipeline over one input.
    pub fn assess(&self, input: &AssessmentInput) -> Result<AssessmentResult> {
        let span = info_span!(
            "assessment",
            process_items = input.process_items().len(),
            results_items = input.results_items().len()
        );
        let _enter = span.enter();

        self.validate()?;
        let process_weights = self.process_weights.unwrap_or_default();
        let results_weights = self.results_weights.unwrap_or_default();

        // 1. Item scores, grouped by category in first-appearance order
        debug!(phase = %AssessmentPhase::ItemScoring, "Entering phase");
        let mut category_order: Vec<String> = Vec::new();
        let mut categories: BTreeMap<String, CategoryAccumulator> = BTreeMap::new();
        let mut process_integration = Vec::new();
        let mut results_integration = Vec::new();
        let mut item_scores = Vec::with_capacity(input.len());

        for item in input.items() {
            let score =
                score_with_validated_weights(item.indicators(), &process_weights, &results_weights);

            let accumulator = categories
                .entry(item.category().to_string())
                .or_insert_with(|| {
                    category_order.push(item.category().to_string());
                    CategoryAccumulator::default()
                });
            accumulator.scores.push(score);
            accumulator.points.push(item.point_value());

            match item.kind() {
                ItemKind::Process => process_integration.push(item.indicators().integration()),
                ItemKind::Results => results_integration.push(item.indicators().integration()),
            }

            let gap_priority = compute_gap_priority_score(
                score,
                DEFAULT_TARGET_SCORE,
                item.point_value(),
                item.deployment_gap(),
            );
            debug!(
                item = item.item_id(),
                category = item.category(),
                score,
                gap_priority,
                "Scored item"
            );

            item_scores.push(ItemScore {
                item_id: item.item_id().to_string(),
                category: item.category().to_string(),
                kind: item.kind(),
                score,
                point_value: item.point_value(),
                gap_priority,
            });
        }

        // 2. Declared allocations must match the items' point values
        debug!(phase = %AssessmentPhase::AllocationCheck, "Entering phase");
        check_allocations(input.category_point_allocations(), &categories)?;

        // 3. Category scores
        debug!(phase = %AssessmentPhase::CategoryAggregation, "Entering phase");
        let mut category_scores = Vec::with_capacity(category_order.len());
        for category in &category_order {
            let Some(accumulator) = categories.get(category) else {
                continue;
            };
            let score = compute_category_score(&accumulator.scores, &accumulator.points)?;
            category_scores.push(CategoryScore {
                category: category.clone(),
                score,
                item_count: accumulator.scores.len(),
                total_points: accumulator.points.iter().map(|p| u64::from(*p)).sum(),
            });
        }

        // 4. Organizational score
        debug!(phase = %AssessmentPhase::OrganizationalScoring, "Entering phase");
        let score_map: BTreeMap<String, f64> = category_scores
            .iter()
            .map(|c| (c.category.clone(), c.score))
            .collect();
        let organizational_score =
            compute_organizational_score(&score_map, self.category_weights.as_ref())?;
        let unweighted = match &self.category_weights {
            Some(weights) => unweighted_categories(&score_map, weights),
            None => unweighted_categories(&score_map, &CategoryWeights::edpex()),
        };

        // 5. Integration Health Index
        debug!(phase = %AssessmentPhase::IntegrationHealth, "Entering phase");
        let ihi = compute_integration_health_index(&process_integration, &results_integration)?;

        // 6. Gap priorities
        debug!(phase = %AssessmentPhase::Prioritization, "Entering phase");
        let gap_priorities = rank_improvement_priorities(
            item_scores
                .iter()
                .map(|i| (i.item_id.clone(), i.gap_priority)),
        );

        // 7. Maturity
        debug!(phase = %AssessmentPhase::Classification, "Entering phase");
        let maturity_level = classify_maturity_level(organizational_score)?;

        info!(
            organizational_score,
            ihi,
            maturity = maturity_level.label,
            "Assessment complete"
        );

        Ok(AssessmentResult {
            organizational_score,
            category_scores,
            item_scores,
            ihi,
            integration_health: IntegrationHealth::from_index(ihi),
            gap_priorities,
            maturity_level,
            metadata: AssessmentMetadata {
                process_items_count: input.process_items().len(),
                results_items_count: input.results_items().len(),
                total_categories: category_order.len(),
                unweighted_categories: unweighted,
            },
        })
    }

    /// Assess independent departments in parallel.
    ///
    /// Outcomes are returned in input order; a failing department does not
    /// affect the others.
    pub fn assess_departments(&self, departments: &[Department]) -> Vec<DepartmentAssessment> {
        departments
            .par_iter()
            .map(|department| {
                let span = info_span!("department", name = %department.name);
                let _enter = span.enter();
                DepartmentAssessment {
                    name: department.name.clone(),
                    outcome: self.assess(&department.input),
                }
            })
            .collect()
    }
}

// Pure function: compare declared allocations with observed point values
fn check_allocations(
    allocations: &BTreeMap<String, Vec<u32>>,
    categories: &BTreeMap<String, CategoryAccumulator>,
) -> Result<()> {
    for (category, expected) in allocations {
        let actual = categories
            .get(category)
            .map(|c| c.points.clone())
            .unwrap_or_default();
        if &actual != expected {
            return Err(ScoringError::AllocationMismatch {
                category: category.clone(),
                expected: expected.clone(),
                actual,
            });
        }
    }
    Ok(())
}

//! Aggregation up the rubric hierarchy.
//!
//! - Equation 3: category score as the point-value weighted mean of its items
//! - Equation 4: organizational score as the category-weighted sum
//!
//! The organizational score requires a score for every weighted category.
//! Scored categories that carry no weight do not contribute; they are
//! reported by [`unweighted_categories`] so callers can surface them.

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::weights::{CategoryWeights, WeightMap};
use crate::errors::{Result, ScoringError};

/// Compute a category score as the point-weighted mean of item scores
/// (Equation 3).
///
/// ```text
/// C_k = Σ(v_i · S_i) / Σ(v_i)
/// ```
///
/// Empty input yields 0.0. Mismatched lengths and a zero point total are
/// errors.
///
/// # Example
///
/// ```rust
/// use edcellence::scoring::compute_category_score;
///
/// let score = compute_category_score(&[75.0, 82.5, 68.0], &[70, 50, 30]).unwrap();
/// assert!((score - 76.1).abs() < 1e-9);
/// ```
pub fn compute_category_score(item_scores: &[f64], item_point_values: &[u32]) -> Result<f64> {
    if item_scores.len() != item_point_values.len() {
        return Err(ScoringError::shape(
            "item_scores",
            item_scores.len(),
            "item_point_values",
            item_point_values.len(),
        ));
    }

    if item_scores.is_empty() {
        return Ok(0.0);
    }

    let numerator: f64 = item_scores
        .iter()
        .zip(item_point_values)
        .map(|(score, points)| score * f64::from(*points))
        .sum();
    let denominator: u64 = item_point_values.iter().map(|p| u64::from(*p)).sum();

    if denominator == 0 {
        return Err(ScoringError::Division {
            items: item_scores.len(),
        });
    }

    Ok(numerator / denominator as f64)
}

/// Compute the organizational score as the weighted sum of category scores
/// (Equation 4).
///
/// `None` selects the EdPEx distribution. Every weighted category must have
/// a score; extra scored categories are ignored.
pub fn compute_organizational_score(
    category_scores: &BTreeMap<String, f64>,
    category_weights: Option<&CategoryWeights>,
) -> Result<f64> {
    let default_weights;
    let weights = match category_weights {
        Some(weights) => weights,
        None => {
            default_weights = CategoryWeights::edpex();
            &default_weights
        }
    };
    weights.validate()?;

    let mut score = 0.0;
    for (category, weight) in weights.iter() {
        let category_score =
            category_scores
                .get(category)
                .ok_or_else(|| ScoringError::MissingCategory {
                    category: category.to_string(),
                })?;
        score += weight * category_score;
    }

    let ignored = unweighted_categories(category_scores, weights);
    if !ignored.is_empty() {
        warn!(
            categories = ?ignored,
            "Scored categories without a weight do not contribute to the organizational score"
        );
    }

    Ok(score.clamp(0.0, 100.0))
}

/// Categories present in the score map but absent from the weight map.
pub fn unweighted_categories(
    category_scores: &BTreeMap<String, f64>,
    category_weights: &CategoryWeights,
) -> Vec<String> {
    category_scores
        .keys()
        .filter(|category| !category_weights.contains(category))
        .cloned()
        .collect()
}

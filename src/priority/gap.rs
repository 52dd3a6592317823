//! Gap-based improvement prioritization (Equation 6).
//!
//! An item's gap priority combines its scoring shortfall, its rubric weight
//! and how much of the organization still lacks the practice:
//!
//! ```text
//! G_i = max(0, (T_i − S_i) · v_i · δ_i)
//! ```

use std::cmp::Ordering;

use serde::Serialize;

/// Target score used by the assessment engine.
pub const DEFAULT_TARGET_SCORE: f64 = 100.0;

/// Compute the gap priority score for one item (Equation 6).
///
/// Items already at or above target score 0.0.
///
/// # Example
///
/// ```rust
/// use edcellence::priority::compute_gap_priority_score;
///
/// // 80% of the organization lacks this practice
/// let priority = compute_gap_priority_score(45.0, 100.0, 70, 0.80);
/// assert_eq!(priority, 3080.0);
/// ```
pub fn compute_gap_priority_score(
    current_score: f64,
    target_score: f64,
    point_value: u32,
    deployment_urgency: f64,
) -> f64 {
    let gap = target_score - current_score;
    let priority = gap * f64::from(point_value) * deployment_urgency;
    priority.max(0.0)
}

/// One entry of a gap priority ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGap {
    pub item_id: String,
    pub priority: f64,
}

impl RankedGap {
    pub fn new(item_id: impl Into<String>, priority: f64) -> Self {
        Self {
            item_id: item_id.into(),
            priority,
        }
    }
}

/// Rank items by gap priority, highest first.
///
/// The sort is stable: items with equal priority keep their input order.
pub fn rank_improvement_priorities<I, K>(gap_scores: I) -> Vec<RankedGap>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    let mut ranked: Vec<RankedGap> = gap_scores
        .into_iter()
        .map(|(item_id, priority)| RankedGap::new(item_id, priority))
        .collect();
    ranked.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(Ordering::Equal));
    ranked
}

/// Keep the first `limit` entries of a ranking.
pub fn take_top(ranked: &[RankedGap], limit: Option<usize>) -> &[RankedGap] {
    match limit {
        Some(n) => &ranked[..n.min(ranked.len())],
        None => ranked,
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ranking_preserves_count_and_order(
            priorities in prop::collection::vec(0u32..5, 0..30)
        ) {
            let input: Vec<(String, f64)> = priorities
                .iter()
                .enumerate()
                .map(|(i, p)| (i.to_string(), f64::from(*p)))
                .collect();
            let ranked = rank_improvement_priorities(input.clone());
            prop_assert_eq!(ranked.len(), input.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority >= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    let a: usize = pair[0].item_id.parse().unwrap();
                    let b: usize = pair[1].item_id.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}

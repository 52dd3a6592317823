//! Item scoring: ADLI process scores (Equation 1) and LeTCI results scores
//! (Equation 2).
//!
//! Both are a weighted sum of the four indicators scaled to 0-100:
//!
//! ```text
//! S = 100 · Σ w_d · x_d        with Σ w_d = 1
//! ```
//!
//! The final clamp only absorbs floating-point overshoot; valid indicators
//! and valid weights already bound the result to [0, 100].

use crate::config::weights::{ProcessWeights, ResultsWeights, WeightMap};
use crate::core::{ItemIndicators, ProcessIndicators, ResultsIndicators};
use crate::errors::Result;

/// Compute the ADLI process item score (Equation 1).
///
/// `None` selects [`ProcessWeights::DEFAULT`].
///
/// # Example
///
/// ```rust
/// use edcellence::core::ProcessIndicators;
/// use edcellence::scoring::compute_process_score;
///
/// let adli = ProcessIndicators::new(0.80, 0.70, 0.65, 0.75).unwrap();
/// let score = compute_process_score(&adli, None).unwrap();
/// assert!((score - 73.0).abs() < 1e-9);
/// ```
pub fn compute_process_score(
    indicators: &ProcessIndicators,
    weights: Option<&ProcessWeights>,
) -> Result<f64> {
    let weights = weights.unwrap_or(&ProcessWeights::DEFAULT);
    weights.validate()?;
    Ok(weighted_process_score(indicators, weights))
}

/// Compute the LeTCI results item score (Equation 2).
///
/// `None` selects [`ResultsWeights::DEFAULT`].
pub fn compute_results_score(
    indicators: &ResultsIndicators,
    weights: Option<&ResultsWeights>,
) -> Result<f64> {
    let weights = weights.unwrap_or(&ResultsWeights::DEFAULT);
    weights.validate()?;
    Ok(weighted_results_score(indicators, weights))
}

/// Score an item with the rubric matching its indicators.
pub fn compute_item_score(
    indicators: &ItemIndicators,
    process_weights: Option<&ProcessWeights>,
    results_weights: Option<&ResultsWeights>,
) -> Result<f64> {
    match indicators {
        ItemIndicators::Process(p) => compute_process_score(p, process_weights),
        ItemIndicators::Results(r) => compute_results_score(r, results_weights),
    }
}

/// Score an item with weights the caller has already validated.
pub(crate) fn score_with_validated_weights(
    indicators: &ItemIndicators,
    process_weights: &ProcessWeights,
    results_weights: &ResultsWeights,
) -> f64 {
    match indicators {
        ItemIndicators::Process(p) => weighted_process_score(p, process_weights),
        ItemIndicators::Results(r) => weighted_results_score(r, results_weights),
    }
}

fn weighted_process_score(indicators: &ProcessIndicators, weights: &ProcessWeights) -> f64 {
    let score = 100.0
        * (weights.approach * indicators.approach()
            + weights.deployment * indicators.deployment()
            + weights.learning * indicators.learning()
            + weights.integration * indicators.integration());
    score.clamp(0.0, 100.0)
}

fn weighted_results_score(indicators: &ResultsIndicators, weights: &ResultsWeights) -> f64 {
    let score = 100.0
        * (weights.level * indicators.level()
            + weights.trend * indicators.trend()
            + weights.comparison * indicators.comparison()
            + weights.integration * indicators.integration());
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScoringError;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn all_ones_scores_hundred() {
        let adli = ProcessIndicators::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(compute_process_score(&adli, None).unwrap(), 100.0);

        let letci = ResultsIndicators::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(compute_results_score(&letci, None).unwrap(), 100.0);
    }

    #[test]
    fn all_zeros_scores_zero() {
        let adli = ProcessIndicators::new(0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(compute_process_score(&adli, None).unwrap(), 0.0);

        let letci = ResultsIndicators::new(0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(compute_results_score(&letci, None).unwrap(), 0.0);
    }

    #[test]
    fn custom_process_weights() {
        let adli = ProcessIndicators::new(0.8, 0.6, 0.7, 0.5).unwrap();
        let weights = ProcessWeights {
            approach: 0.25,
            deployment: 0.25,
            learning: 0.25,
            integration: 0.25,
        };
        let expected = 100.0 * (0.25 * 0.8 + 0.25 * 0.6 + 0.25 * 0.7 + 0.25 * 0.5);
        assert_close(compute_process_score(&adli, Some(&weights)).unwrap(), expected);
    }

    #[test]
    fn default_results_weights_favor_level() {
        let letci = ResultsIndicators::new(0.85, 0.70, 0.65, 0.80).unwrap();
        // 100 * (0.40*0.85 + 0.25*0.70 + 0.25*0.65 + 0.10*0.80)
        assert_close(compute_results_score(&letci, None).unwrap(), 75.75);
    }

    #[test]
    fn invalid_weights_fail_before_scoring() {
        let adli = ProcessIndicators::new(0.5, 0.5, 0.5, 0.5).unwrap();
        let weights = ProcessWeights {
            approach: 0.3,
            deployment: 0.3,
            learning: 0.3,
            integration: 0.3,
        };
        let err = compute_process_score(&adli, Some(&weights)).unwrap_err();
        assert!(matches!(err, ScoringError::Weight { .. }));
    }

    #[test]
    fn item_score_dispatches_on_rubric() {
        let letci = ResultsIndicators::new(1.0, 0.0, 0.0, 0.0).unwrap();
        let score = compute_item_score(&ItemIndicators::Results(letci), None, None).unwrap();
        assert_close(score, 40.0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::errors::ScoringError;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn process_score_is_bounded(
            a in 0.0..=1.0f64,
            d in 0.0..=1.0f64,
            l in 0.0..=1.0f64,
            i in 0.0..=1.0f64,
        ) {
            let adli = ProcessIndicators::new(a, d, l, i).unwrap();
            let score = compute_process_score(&adli, None).unwrap();
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn results_score_is_bounded(
            lv in 0.0..=1.0f64,
            tr in 0.0..=1.0f64,
            cp in 0.0..=1.0f64,
            i in 0.0..=1.0f64,
        ) {
            let letci = ResultsIndicators::new(lv, tr, cp, i).unwrap();
            let score = compute_results_score(&letci, None).unwrap();
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn overweight_maps_always_fail(
            a in 0.0..=1.0f64,
            d in 0.0..=1.0f64,
            l in 0.0..=1.0f64,
            i in 0.0..=1.0f64,
        ) {
            let adli = ProcessIndicators::new(a, d, l, i).unwrap();
            let weights = ProcessWeights {
                approach: 0.3,
                deployment: 0.3,
                learning: 0.3,
                integration: 0.3,
            };
            let is_weight_error = matches!(
                compute_process_score(&adli, Some(&weights)),
                Err(ScoringError::Weight { .. })
            );
            prop_assert!(is_weight_error);
        }

        #[test]
        fn underweight_results_maps_always_fail(
            lv in 0.0..=1.0f64,
            tr in 0.0..=1.0f64,
            cp in 0.0..=1.0f64,
            i in 0.0..=1.0f64,
        ) {
            let letci = ResultsIndicators::new(lv, tr, cp, i).unwrap();
            let weights = ResultsWeights {
                level: 0.2,
                trend: 0.2,
                comparison: 0.2,
                integration: 0.2,
            };
            let is_weight_error = matches!(
                compute_results_score(&letci, Some(&weights)),
                Err(ScoringError::Weight { map: "results", .. })
            );
            prop_assert!(is_weight_error);
        }
    }
}

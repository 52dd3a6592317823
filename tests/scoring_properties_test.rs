//! End-to-end checks of the scoring equations through the public API.

use edcellence::{
    classify_maturity_level, compute_category_score, compute_gap_priority_score,
    compute_integration_health_index, compute_organizational_score, compute_process_score,
    compute_results_score, rank_improvement_priorities, CategoryWeights, ErrorCode,
    ProcessIndicators, ProcessWeights, ResultsIndicators, ScoringError, MATURITY_BANDS,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn category_scores() -> BTreeMap<String, f64> {
    [
        ("Leadership", 76.25),
        ("Strategy", 72.5),
        ("Customers", 74.0),
        ("Measurement", 82.0),
        ("Workforce", 68.5),
        ("Operations", 78.0),
        ("Results", 81.25),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

#[test]
fn process_score_extremes() {
    let zero = ProcessIndicators::new(0.0, 0.0, 0.0, 0.0).unwrap();
    let one = ProcessIndicators::new(1.0, 1.0, 1.0, 1.0).unwrap();
    assert_eq!(compute_process_score(&zero, None).unwrap(), 0.0);
    assert!((compute_process_score(&one, None).unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn results_score_uses_letci_defaults() {
    let letci = ResultsIndicators::new(0.85, 0.80, 0.75, 0.85).unwrap();
    let expected = 100.0 * (0.40 * 0.85 + 0.25 * 0.80 + 0.25 * 0.75 + 0.10 * 0.85);
    assert!((compute_results_score(&letci, None).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn uneven_weights_are_rejected() {
    let adli = ProcessIndicators::new(0.8, 0.7, 0.65, 0.75).unwrap();
    let weights = ProcessWeights {
        approach: 0.3,
        deployment: 0.3,
        learning: 0.3,
        integration: 0.3,
    };
    let err = compute_process_score(&adli, Some(&weights)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::WEIGHT);
}

#[test]
fn category_score_examples() {
    assert_eq!(compute_category_score(&[], &[]).unwrap(), 0.0);
    assert_eq!(compute_category_score(&[75.0], &[100]).unwrap(), 75.0);
    let score = compute_category_score(&[76.25, 72.5, 78.0], &[70, 50, 30]).unwrap();
    assert!((score - 75.35).abs() < 1e-9);
}

#[test]
fn category_score_shape_mismatch() {
    let err = compute_category_score(&[75.0, 80.0], &[100]).unwrap_err();
    assert!(matches!(err, ScoringError::Shape { .. }));
}

#[test]
fn organizational_score_with_edpex_weights() {
    let score = compute_organizational_score(&category_scores(), None).unwrap();
    assert!((score - 77.6025).abs() < 1e-2);
}

#[test]
fn organizational_score_missing_category() {
    let mut scores = category_scores();
    scores.remove("Workforce");
    let err = compute_organizational_score(&scores, None).unwrap_err();
    assert_eq!(
        err,
        ScoringError::MissingCategory {
            category: "Workforce".into()
        }
    );
}

#[test]
fn organizational_score_with_custom_weights() {
    let weights = CategoryWeights::from_pairs([("Leadership", 0.5), ("Results", 0.5)]);
    let score = compute_organizational_score(&category_scores(), Some(&weights)).unwrap();
    assert!((score - (76.25 + 81.25) / 2.0).abs() < 1e-9);
}

#[test]
fn integration_health_index_example() {
    let ihi =
        compute_integration_health_index(&[0.7, 0.8, 0.6, 0.75], &[0.65, 0.80, 0.70]).unwrap();
    assert!((ihi - 0.714583).abs() < 1e-6);
}

#[test]
fn gap_priority_example() {
    assert!((compute_gap_priority_score(45.0, 100.0, 70, 0.80) - 3080.0).abs() < 1e-9);
    assert_eq!(compute_gap_priority_score(100.0, 80.0, 70, 1.0), 0.0);
}

#[test]
fn ranking_is_stable_for_ties() {
    let ranked = rank_improvement_priorities([("a", 10.0), ("b", 30.0), ("c", 10.0), ("d", 30.0)]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.item_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn maturity_fractional_boundaries() {
    assert_eq!(classify_maturity_level(20.0).unwrap().level, 1);
    assert_eq!(classify_maturity_level(20.5).unwrap().level, 1);
    assert_eq!(classify_maturity_level(60.5).unwrap().level, 3);
    assert_eq!(classify_maturity_level(85.5).unwrap().level, 4);
    assert_eq!(classify_maturity_level(100.0).unwrap().level, 5);
    assert!(classify_maturity_level(100.5).is_err());
}

proptest! {
    #[test]
    fn every_score_in_range_has_exactly_one_band(score in 0.0f64..=100.0) {
        let level = classify_maturity_level(score).unwrap();
        let covering = MATURITY_BANDS
            .iter()
            .enumerate()
            .filter(|(i, band)| {
                let upper_ok = match MATURITY_BANDS.get(i + 1) {
                    Some(next) => score < f64::from(next.low),
                    None => score <= f64::from(band.high),
                };
                score >= f64::from(band.low) && upper_ok
            })
            .count();
        prop_assert_eq!(covering, 1);
        prop_assert!(level.level >= 1 && level.level <= 5);
    }

    #[test]
    fn gap_priority_is_never_negative(
        current in 0.0f64..=100.0,
        target in 0.0f64..=100.0,
        points in 1u32..200,
        urgency in 0.0f64..=1.0,
    ) {
        let priority = compute_gap_priority_score(current, target, points, urgency);
        prop_assert!(priority >= 0.0);
        if current >= target {
            prop_assert_eq!(priority, 0.0);
        }
    }
}

//! Indicator records for process and results items.
//!
//! Indicators are validated once at construction ("parse, don't validate").
//! A [`ProcessIndicators`] or [`ResultsIndicators`] value that exists always
//! holds four values in the unit interval, so scoring code never rechecks
//! them. Deserialization goes through the same constructors.

use crate::errors::{Result, ScoringError};
use serde::{Deserialize, Serialize};

/// Check that a value lies in the unit interval [0.0, 1.0].
///
/// NaN fails the check.
pub fn check_unit_interval(field: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScoringError::range(field, value, 0.0, 1.0))
    }
}

/// ADLI dimension indicators for a process item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProcessIndicators")]
pub struct ProcessIndicators {
    approach: f64,
    deployment: f64,
    learning: f64,
    integration: f64,
}

impl ProcessIndicators {
    /// Create process indicators, rejecting any value outside [0, 1].
    pub fn new(approach: f64, deployment: f64, learning: f64, integration: f64) -> Result<Self> {
        Ok(Self {
            approach: check_unit_interval("approach", approach)?,
            deployment: check_unit_interval("deployment", deployment)?,
            learning: check_unit_interval("learning", learning)?,
            integration: check_unit_interval("integration", integration)?,
        })
    }

    pub fn approach(&self) -> f64 {
        self.approach
    }

    pub fn deployment(&self) -> f64 {
        self.deployment
    }

    pub fn learning(&self) -> f64 {
        self.learning
    }

    pub fn integration(&self) -> f64 {
        self.integration
    }
}

/// LeTCI dimension indicators for a results item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResultsIndicators")]
pub struct ResultsIndicators {
    level: f64,
    trend: f64,
    comparison: f64,
    integration: f64,
}

impl ResultsIndicators {
    /// Create results indicators, rejecting any value outside [0, 1].
    pub fn new(level: f64, trend: f64, comparison: f64, integration: f64) -> Result<Self> {
        Ok(Self {
            level: check_unit_interval("level", level)?,
            trend: check_unit_interval("trend", trend)?,
            comparison: check_unit_interval("comparison", comparison)?,
            integration: check_unit_interval("integration", integration)?,
        })
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn trend(&self) -> f64 {
        self.trend
    }

    pub fn comparison(&self) -> f64 {
        self.comparison
    }

    pub fn integration(&self) -> f64 {
        self.integration
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProcessIndicators {
    approach: f64,
    deployment: f64,
    learning: f64,
    integration: f64,
}

impl TryFrom<RawProcessIndicators> for ProcessIndicators {
    type Error = ScoringError;

    fn try_from(raw: RawProcessIndicators) -> Result<Self> {
        Self::new(raw.approach, raw.deployment, raw.learning, raw.integration)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResultsIndicators {
    level: f64,
    trend: f64,
    comparison: f64,
    integration: f64,
}

impl TryFrom<RawResultsIndicators> for ResultsIndicators {
    type Error = ScoringError;

    fn try_from(raw: RawResultsIndicators) -> Result<Self> {
        Self::new(raw.level, raw.trend, raw.comparison, raw.integration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_process_indicators_are_kept_as_given() {
        let indicators = ProcessIndicators::new(0.7, 0.8, 0.6, 0.75).unwrap();
        assert_eq!(indicators.approach(), 0.7);
        assert_eq!(indicators.deployment(), 0.8);
        assert_eq!(indicators.learning(), 0.6);
        assert_eq!(indicators.integration(), 0.75);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(ProcessIndicators::new(0.0, 0.0, 1.0, 1.0).is_ok());
        assert!(ResultsIndicators::new(1.0, 0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn out_of_range_process_value_is_rejected() {
        let err = ProcessIndicators::new(1.5, 0.8, 0.6, 0.75).unwrap_err();
        assert_eq!(err, ScoringError::range("approach", 1.5, 0.0, 1.0));
        assert!(err.to_string().contains("must be in range"));
    }

    #[test]
    fn negative_results_value_is_rejected() {
        let err = ResultsIndicators::new(0.5, 0.5, -0.1, 0.5).unwrap_err();
        assert!(matches!(err, ScoringError::Range { ref field, .. } if field == "comparison"));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(ProcessIndicators::new(0.5, f64::NAN, 0.5, 0.5).is_err());
        assert!(ResultsIndicators::new(0.5, 0.5, 0.5, f64::NAN).is_err());
    }

    #[test]
    fn deserialization_validates_ranges() {
        let ok: ProcessIndicators = serde_json::from_str(
            r#"{"approach":0.8,"deployment":0.7,"learning":0.65,"integration":0.75}"#,
        )
        .unwrap();
        assert_eq!(ok.learning(), 0.65);

        let err = serde_json::from_str::<ResultsIndicators>(
            r#"{"level":1.2,"trend":0.7,"comparison":0.65,"integration":0.8}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("level must be in range"));
    }
}

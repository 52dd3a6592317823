//! Weight maps for item scoring and organizational aggregation.
//!
//! This module contains:
//! - ADLI process dimension weights (NIST Baldrige defaults)
//! - LeTCI results dimension weights (Baldrige defaults)
//! - Category weights (EdPEx distribution)
//!
//! Defaults are immutable constants. Overrides are passed explicitly and are
//! validated before use: every weight must be finite and non-negative, and
//! the weights of a map must sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].

use crate::errors::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allowed deviation of a weight-map sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// EdPEx category weights, in criteria order.
pub const EDPEX_CATEGORY_WEIGHTS: [(&str, f64); 7] = [
    ("Leadership", 0.12),
    ("Strategy", 0.085),
    ("Customers", 0.085),
    ("Measurement", 0.10),
    ("Workforce", 0.10),
    ("Operations", 0.15),
    ("Results", 0.36),
];

/// A named set of non-negative weights that must sum to 1.0.
pub trait WeightMap {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Weight entries as (key, weight) pairs.
    fn entries(&self) -> Vec<(&str, f64)>;

    /// Validate the map: finite, non-negative weights summing to 1.0.
    fn validate(&self) -> Result<()> {
        validate_weights(Self::NAME, &self.entries())
    }
}

// Pure function: validate a weight map given as entries
pub fn validate_weights(map: &'static str, entries: &[(&str, f64)]) -> Result<()> {
    let sum: f64 = entries.iter().map(|(_, w)| w).sum();

    if let Some((key, weight)) = entries
        .iter()
        .find(|(_, w)| !w.is_finite() || *w < 0.0)
    {
        return Err(ScoringError::invalid_weight(map, sum, key, *weight));
    }

    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ScoringError::weight_sum(map, sum));
    }

    Ok(())
}

/// ADLI dimension weights for process scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessWeights {
    #[serde(alias = "A")]
    pub approach: f64,
    #[serde(alias = "D")]
    pub deployment: f64,
    #[serde(alias = "L")]
    pub learning: f64,
    #[serde(alias = "I")]
    pub integration: f64,
}

impl ProcessWeights {
    /// NIST Baldrige default weights.
    pub const DEFAULT: Self = Self {
        approach: 0.30,
        deployment: 0.30,
        learning: 0.20,
        integration: 0.20,
    };
}

impl Default for ProcessWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WeightMap for ProcessWeights {
    const NAME: &'static str = "process";

    fn entries(&self) -> Vec<(&str, f64)> {
        vec![
            ("approach", self.approach),
            ("deployment", self.deployment),
            ("learning", self.learning),
            ("integration", self.integration),
        ]
    }
}

/// LeTCI dimension weights for results scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultsWeights {
    #[serde(alias = "Lv")]
    pub level: f64,
    #[serde(alias = "Tr")]
    pub trend: f64,
    #[serde(alias = "Cp")]
    pub comparison: f64,
    #[serde(alias = "I")]
    pub integration: f64,
}

impl ResultsWeights {
    /// Baldrige default weights; current level dominates.
    pub const DEFAULT: Self = Self {
        level: 0.40,
        trend: 0.25,
        comparison: 0.25,
        integration: 0.10,
    };
}

impl Default for ResultsWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WeightMap for ResultsWeights {
    const NAME: &'static str = "results";

    fn entries(&self) -> Vec<(&str, f64)> {
        vec![
            ("level", self.level),
            ("trend", self.trend),
            ("comparison", self.comparison),
            ("integration", self.integration),
        ]
    }
}

/// Category weights for the organizational score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryWeights(BTreeMap<String, f64>);

impl CategoryWeights {
    /// The EdPEx default distribution.
    pub fn edpex() -> Self {
        Self(
            EDPEX_CATEGORY_WEIGHTS
                .iter()
                .map(|(name, weight)| ((*name).to_string(), *weight))
                .collect(),
        )
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, w)| (k.into(), w)).collect())
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, w)| (k.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::edpex()
    }
}

impl WeightMap for CategoryWeights {
    const NAME: &'static str = "category";

    fn entries(&self) -> Vec<(&str, f64)> {
        self.iter().collect()
    }
}

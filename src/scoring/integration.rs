//! Integration Health Index (Equation 5) and its interpretation.

use serde::Serialize;

use crate::errors::{Result, ScoringError};

/// IHI above this value indicates strong integration.
pub const STRONG_INTEGRATION_THRESHOLD: f64 = 0.75;

/// IHI below this value indicates weak, siloed integration.
pub const WEAK_INTEGRATION_THRESHOLD: f64 = 0.60;

/// Compute the Integration Health Index (Equation 5).
///
/// ```text
/// IHI = ½ · (mean(P_I) + mean(R_I))
/// ```
///
/// Both sequences must be non-empty. The result is clamped to [0, 1].
pub fn compute_integration_health_index(
    process_integration_scores: &[f64],
    results_integration_scores: &[f64],
) -> Result<f64> {
    if process_integration_scores.is_empty() {
        return Err(ScoringError::EmptyInput {
            what: "process integration scores",
        });
    }
    if results_integration_scores.is_empty() {
        return Err(ScoringError::EmptyInput {
            what: "results integration scores",
        });
    }

    let ihi = 0.5 * (mean(process_integration_scores) + mean(results_integration_scores));
    Ok(ihi.clamp(0.0, 1.0))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Qualitative reading of an IHI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationHealth {
    /// IHI > 0.75
    Strong,
    /// 0.60 <= IHI <= 0.75
    Moderate,
    /// IHI < 0.60
    Weak,
}

impl IntegrationHealth {
    pub fn from_index(ihi: f64) -> Self {
        if ihi > STRONG_INTEGRATION_THRESHOLD {
            Self::Strong
        } else if ihi >= WEAK_INTEGRATION_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Strong => "Strong cross-category integration",
            Self::Moderate => "Moderate integration with improvement opportunities",
            Self::Weak => "Weak integration, siloed operations",
        }
    }
}

impl std::fmt::Display for IntegrationHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

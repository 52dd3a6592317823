/// Maturity classification for organizational scores
///
/// Five ordered Baldrige maturity bands partition the 0-100 score range.
/// The band table lists integer ranges; a fractional score that falls
/// between two bands (e.g. 20.5) belongs to the lower band, so each band
/// effectively covers `[low, next_low)` and the last covers `[86, 100]`.
use serde::Serialize;

use crate::errors::{Result, ScoringError};

/// One row of the maturity band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityBand {
    pub level: u8,
    pub low: u8,
    pub high: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// Baldrige maturity bands in ascending order.
pub const MATURITY_BANDS: [MaturityBand; 5] = [
    MaturityBand {
        level: 1,
        low: 0,
        high: 20,
        label: "Reactive",
        description: "Activity-based, undocumented",
    },
    MaturityBand {
        level: 2,
        low: 21,
        high: 40,
        label: "Early Systematic",
        description: "Initial process definitions",
    },
    MaturityBand {
        level: 3,
        low: 41,
        high: 60,
        label: "Aligned",
        description: "Systematic, deployed across units",
    },
    MaturityBand {
        level: 4,
        low: 61,
        high: 85,
        label: "Integrated",
        description: "Well-deployed, strategic alignment",
    },
    MaturityBand {
        level: 5,
        low: 86,
        high: 100,
        label: "Role Model",
        description: "Innovative, benchmarked, sustained",
    },
];

/// Classification record for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaturityLevel {
    pub level: u8,
    pub label: &'static str,
    pub description: &'static str,
    pub range: (u8, u8),
}

impl From<&MaturityBand> for MaturityLevel {
    fn from(band: &MaturityBand) -> Self {
        Self {
            level: band.level,
            label: band.label,
            description: band.description,
            range: (band.low, band.high),
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}: {}", self.level, self.label)
    }
}

/// Classify a score into its maturity band.
///
/// Scores outside [0, 100] (and NaN) are rejected.
///
/// # Example
///
/// ```rust
/// use edcellence::maturity::classify_maturity_level;
///
/// let maturity = classify_maturity_level(72.5).unwrap();
/// assert_eq!(maturity.level, 4);
/// assert_eq!(maturity.label, "Integrated");
/// assert_eq!(maturity.range, (61, 85));
/// ```
pub fn classify_maturity_level(score: f64) -> Result<MaturityLevel> {
    if !(0.0..=100.0).contains(&score) {
        return Err(ScoringError::OutOfRange { score });
    }

    for (index, band) in MATURITY_BANDS.iter().enumerate() {
        let in_band = match MATURITY_BANDS.get(index + 1) {
            Some(next) => score < f64::from(next.low),
            None => score <= f64::from(band.high),
        };
        if score >= f64::from(band.low) && in_band {
            return Ok(MaturityLevel::from(band));
        }
    }

    Err(ScoringError::OutOfRange { score })
}

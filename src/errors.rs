//! Error types for the scoring pipeline.
//!
//! Every failure the scoring pipeline can report is a variant of
//! [`ScoringError`]. Errors are raised at the boundary of the function that
//! received the offending input; nothing is clamped, defaulted or retried.
//!
//! # Error Codes
//!
//! Each variant carries a stable code for programmatic handling:
//! - E001: indicator or item field out of range
//! - E002: weight map does not sum to 1.0
//! - E003: parallel sequences of different lengths
//! - E004: weighted category missing from the score map
//! - E005: required sequence is empty
//! - E006: aggregation denominator is zero
//! - E007: score outside [0, 100] at classification time
//! - E008: category point values differ from the declared allocation
//!
//! # Example
//!
//! ```rust
//! use edcellence::errors::{ErrorCode, ScoringError};
//!
//! let err = ScoringError::shape("item_scores", 2, "item_point_values", 3);
//! assert_eq!(err.code(), ErrorCode::SHAPE);
//! assert!(err.to_string().contains("same length"));
//! ```

use serde::Serialize;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Field outside its allowed range
    pub const RANGE: ErrorCode = ErrorCode("E001");
    /// Weight map invalid
    pub const WEIGHT: ErrorCode = ErrorCode("E002");
    /// Parallel sequence length mismatch
    pub const SHAPE: ErrorCode = ErrorCode("E003");
    /// Weighted category has no score
    pub const MISSING_CATEGORY: ErrorCode = ErrorCode("E004");
    /// Empty input sequence
    pub const EMPTY_INPUT: ErrorCode = ErrorCode("E005");
    /// Zero denominator
    pub const DIVISION: ErrorCode = ErrorCode("E006");
    /// Score outside the classification range
    pub const OUT_OF_RANGE: ErrorCode = ErrorCode("E007");
    /// Point values disagree with the category allocation
    pub const ALLOCATION_MISMATCH: ErrorCode = ErrorCode("E008");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised by indicator construction, scoring and classification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A bounded field (indicator, deployment gap, point value) is out of range.
    #[error("{field} must be in range [{min}, {max}], got {value}")]
    Range {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A weight map does not sum to 1.0 or holds an invalid weight.
    #[error("{map} weights must sum to 1.0, got {sum}{}", detail_suffix(.detail))]
    Weight {
        map: &'static str,
        sum: f64,
        detail: Option<String>,
    },

    /// Two parallel sequences have different lengths.
    #[error("{left} and {right} must have same length, got {left_len} and {right_len}")]
    Shape {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// A category named by the weight map has no score.
    #[error("Missing score for category: {category}")]
    MissingCategory { category: String },

    /// A required input sequence is empty.
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    /// The denominator of a weighted mean is zero.
    #[error("Total point values cannot be zero ({items} items)")]
    Division { items: usize },

    /// A score passed to classification lies outside [0, 100].
    #[error("Score {score} outside valid range [0, 100]")]
    OutOfRange { score: f64 },

    /// Item point values of a category differ from its declared allocation.
    #[error("Point values for category {category} do not match allocation: expected {expected:?}, got {actual:?}")]
    AllocationMismatch {
        category: String,
        expected: Vec<u32>,
        actual: Vec<u32>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

impl ScoringError {
    /// Create a range error for a named field.
    pub fn range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::Range {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a weight-sum error.
    pub fn weight_sum(map: &'static str, sum: f64) -> Self {
        Self::Weight {
            map,
            sum,
            detail: None,
        }
    }

    /// Create a weight error for an individual invalid weight.
    pub fn invalid_weight(map: &'static str, sum: f64, key: &str, weight: f64) -> Self {
        Self::Weight {
            map,
            sum,
            detail: Some(format!("weight for '{key}' is {weight}")),
        }
    }

    /// Create a shape error for two parallel sequences.
    pub fn shape(
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    ) -> Self {
        Self::Shape {
            left,
            left_len,
            right,
            right_len,
        }
    }

    /// Stable error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Range { .. } => ErrorCode::RANGE,
            Self::Weight { .. } => ErrorCode::WEIGHT,
            Self::Shape { .. } => ErrorCode::SHAPE,
            Self::MissingCategory { .. } => ErrorCode::MISSING_CATEGORY,
            Self::EmptyInput { .. } => ErrorCode::EMPTY_INPUT,
            Self::Division { .. } => ErrorCode::DIVISION,
            Self::OutOfRange { .. } => ErrorCode::OUT_OF_RANGE,
            Self::AllocationMismatch { .. } => ErrorCode::ALLOCATION_MISMATCH,
        }
    }
}

/// Result type alias for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod io;
pub mod maturity;
pub mod observability;
pub mod priority;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Item, ItemIndicators, ItemKind, ProcessIndicators, ResultsIndicators};

pub use crate::config::{CategoryWeights, EdcellenceConfig, ProcessWeights, ResultsWeights};

pub use crate::engine::{
    AssessmentEngine, AssessmentInput, AssessmentMetadata, AssessmentResult, CategoryScore,
    Department, DepartmentAssessment, ItemScore,
};

pub use crate::errors::{ErrorCode, ScoringError};

pub use crate::maturity::{classify_maturity_level, MaturityLevel, MATURITY_BANDS};

pub use crate::priority::{compute_gap_priority_score, rank_improvement_priorities, RankedGap};

pub use crate::scoring::{
    compute_category_score, compute_integration_health_index, compute_organizational_score,
    compute_process_score, compute_results_score, IntegrationHealth,
};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

//! Logging setup and assessment phase names.
//!
//! The library only emits `tracing` events. The binary installs the
//! subscriber once at startup:
//!
//! ```ignore
//! use edcellence::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(1);
//!     // ... rest of application
//! }
//! ```
//!
//! `EDCELLENCE_LOG` takes an `EnvFilter` directive and overrides the
//! verbosity-derived level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "EDCELLENCE_LOG";

/// Stages of an assessment run, in execution order.
///
/// Recorded on engine spans so log lines show where a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// Scoring each item against its rubric
    ItemScoring,
    /// Checking item point values against category allocations
    AllocationCheck,
    /// Point-weighted category means
    CategoryAggregation,
    /// Category-weighted organizational score
    OrganizationalScoring,
    /// Integration Health Index
    IntegrationHealth,
    /// Gap priority ranking
    Prioritization,
    /// Maturity band lookup
    Classification,
}

impl std::fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemScoring => write!(f, "item_scoring"),
            Self::AllocationCheck => write!(f, "allocation_check"),
            Self::CategoryAggregation => write!(f, "category_aggregation"),
            Self::OrganizationalScoring => write!(f, "organizational_scoring"),
            Self::IntegrationHealth => write!(f, "integration_health"),
            Self::Prioritization => write!(f, "prioritization"),
            Self::Classification => write!(f, "classification"),
        }
    }
}

// Pure function: map -v count to a default filter level
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the log filter: a valid `EDCELLENCE_LOG` directive wins over the
/// verbosity-derived level.
pub fn build_filter(env_directive: Option<&str>, verbosity: u8) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("edcellence={}", default_level(verbosity))))
}

/// Install the global tracing subscriber (stderr, env-filtered).
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_tracing(verbosity: u8) {
    let env_directive = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(env_directive.as_deref(), verbosity);

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }

    #[test]
    fn env_directive_overrides_verbosity() {
        assert_eq!(
            build_filter(Some("edcellence=trace"), 0).to_string(),
            "edcellence=trace"
        );
        assert_eq!(build_filter(None, 2).to_string(), "edcellence=debug");
    }

    #[test]
    fn invalid_env_directive_falls_back_to_verbosity() {
        assert_eq!(
            build_filter(Some("edcellence=loudest"), 1).to_string(),
            "edcellence=info"
        );
    }

    #[test]
    fn phases_display_as_snake_case() {
        assert_eq!(AssessmentPhase::ItemScoring.to_string(), "item_scoring");
        assert_eq!(
            AssessmentPhase::OrganizationalScoring.to_string(),
            "organizational_scoring"
        );
    }
}

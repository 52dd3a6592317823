use serde::{Deserialize, Serialize};

use super::weights::{CategoryWeights, ProcessWeights, ResultsWeights, WeightMap};
use crate::errors::Result;

/// Root configuration structure for edcellence
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EdcellenceConfig {
    /// ADLI weight override
    #[serde(default)]
    pub process_weights: Option<ProcessWeights>,

    /// LeTCI weight override
    #[serde(default)]
    pub results_weights: Option<ResultsWeights>,

    /// Category weight override
    #[serde(default)]
    pub category_weights: Option<CategoryWeights>,
}

impl EdcellenceConfig {
    /// Validate every weight override that is present.
    pub fn validate(&self) -> Result<()> {
        if let Some(weights) = &self.process_weights {
            weights.validate()?;
        }
        if let Some(weights) = &self.results_weights {
            weights.validate()?;
        }
        if let Some(weights) = &self.category_weights {
            weights.validate()?;
        }
        Ok(())
    }

    pub fn process_weights(&self) -> ProcessWeights {
        self.process_weights.unwrap_or_default()
    }

    pub fn results_weights(&self) -> ResultsWeights {
        self.results_weights.unwrap_or_default()
    }

    pub fn category_weights(&self) -> CategoryWeights {
        self.category_weights.clone().unwrap_or_default()
    }
}

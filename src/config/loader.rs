use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::core::EdcellenceConfig;

/// Name of the configuration file searched for by [`load_config`].
pub const CONFIG_FILE_NAME: &str = ".edcellence.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Template written by `edcellence init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Edcellence configuration
#
# Every section is optional. Weights in a section must be non-negative
# and sum to 1.0.

# ADLI process dimension weights (NIST Baldrige defaults)
[process_weights]
approach = 0.30
deployment = 0.30
learning = 0.20
integration = 0.20

# LeTCI results dimension weights
[results_weights]
level = 0.40
trend = 0.25
comparison = 0.25
integration = 0.10

# Category weights for the organizational score (EdPEx distribution)
[category_weights]
Leadership = 0.12
Strategy = 0.085
Customers = 0.085
Measurement = 0.10
Workforce = 0.10
Operations = 0.15
Results = 0.36
"#;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<EdcellenceConfig> {
    let config = toml::from_str::<EdcellenceConfig>(contents)
        .with_context(|| format!("Failed to parse {}", CONFIG_FILE_NAME))?;
    config.validate().context("Invalid weights in configuration")?;
    Ok(config)
}

/// Load and validate a configuration file at an explicit path.
pub fn load_config_from_path(config_path: &Path) -> Result<EdcellenceConfig> {
    let contents = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
    let config = parse_and_validate_config(&contents)
        .with_context(|| format!("In config file {}", config_path.display()))?;
    debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest configuration file at or above `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load the nearest configuration, or the defaults when there is none.
///
/// A configuration file that exists but cannot be read or holds invalid
/// weights is an error.
pub fn load_config_from(start: &Path) -> Result<EdcellenceConfig> {
    match find_config_file(start) {
        Some(path) => load_config_from_path(&path),
        None => {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(EdcellenceConfig::default())
        }
    }
}

/// Load configuration starting from the current directory.
pub fn load_config() -> Result<EdcellenceConfig> {
    let current = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&current)
}

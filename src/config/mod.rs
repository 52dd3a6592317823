//! Configuration: weight maps and the `.edcellence.toml` loader.

mod core;
mod loader;
pub mod weights;

pub use self::core::EdcellenceConfig;
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE,
};
pub use weights::{
    validate_weights, CategoryWeights, ProcessWeights, ResultsWeights, WeightMap,
    EDPEX_CATEGORY_WEIGHTS, WEIGHT_SUM_TOLERANCE,
};

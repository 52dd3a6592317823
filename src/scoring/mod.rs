pub mod aggregation;
pub mod integration;
pub mod item_score;

pub use aggregation::{compute_category_score, compute_organizational_score, unweighted_categories};
pub use integration::{compute_integration_health_index, IntegrationHealth};
pub use item_score::{compute_item_score, compute_process_score, compute_results_score};
pub(crate) use item_score::score_with_validated_weights;

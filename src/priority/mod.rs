pub mod gap;

pub use gap::{
    compute_gap_priority_score, rank_improvement_priorities, take_top, RankedGap,
    DEFAULT_TARGET_SCORE,
};

//! Core domain records: indicators and rubric items.

pub mod indicators;
pub mod items;

pub use indicators::{check_unit_interval, ProcessIndicators, ResultsIndicators};
pub use items::{Item, ItemIndicators, ItemKind};

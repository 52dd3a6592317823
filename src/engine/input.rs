//! Assessment input: the items of one organization or department.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{Item, ItemIndicators, ItemKind, ProcessIndicators, ResultsIndicators};
use crate::errors::Result;

/// Items to assess, plus optional per-category point allocations.
///
/// Items are routed by rubric: process items and results items keep their
/// own insertion order, and process items are always evaluated first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentInput {
    process_items: Vec<Item>,
    results_items: Vec<Item>,
    category_point_allocations: BTreeMap<String, Vec<u32>>,
}

impl AssessmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-built item to the list matching its rubric.
    pub fn add_item(&mut self, item: Item) -> &mut Self {
        match item.kind() {
            ItemKind::Process => self.process_items.push(item),
            ItemKind::Results => self.results_items.push(item),
        }
        self
    }

    /// Build and add a process item.
    pub fn add_process_item(
        &mut self,
        item_id: impl Into<String>,
        category: impl Into<String>,
        indicators: ProcessIndicators,
        point_value: u32,
        deployment_gap: f64,
    ) -> Result<&mut Self> {
        let item = Item::new(
            item_id,
            category,
            ItemIndicators::Process(indicators),
            point_value,
            deployment_gap,
        )?;
        Ok(self.add_item(item))
    }

    /// Build and add a results item.
    pub fn add_results_item(
        &mut self,
        item_id: impl Into<String>,
        category: impl Into<String>,
        indicators: ResultsIndicators,
        point_value: u32,
        deployment_gap: f64,
    ) -> Result<&mut Self> {
        let item = Item::new(
            item_id,
            category,
            ItemIndicators::Results(indicators),
            point_value,
            deployment_gap,
        )?;
        Ok(self.add_item(item))
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        for item in items {
            self.add_item(item);
        }
        self
    }

    /// Declare the expected point values of a category's items.
    pub fn with_allocation(mut self, category: impl Into<String>, points: Vec<u32>) -> Self {
        self.category_point_allocations.insert(category.into(), points);
        self
    }

    pub fn process_items(&self) -> &[Item] {
        &self.process_items
    }

    pub fn results_items(&self) -> &[Item] {
        &self.results_items
    }

    /// All items in evaluation order: process items, then results items.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.process_items.iter().chain(self.results_items.iter())
    }

    pub fn category_point_allocations(&self) -> &BTreeMap<String, Vec<u32>> {
        &self.category_point_allocations
    }

    pub fn len(&self) -> usize {
        self.process_items.len() + self.results_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named assessment input, for multi-department runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    pub name: String,
    pub input: AssessmentInput,
}

impl Department {
    pub fn new(name: impl Into<String>, input: AssessmentInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

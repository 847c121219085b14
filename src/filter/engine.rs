//! Listing filter engine.
//!
//! Owns the catalogue, the active category and the filter state, and keeps
//! the visible record set up to date.

use crate::catalog::{Catalog, Category, Record};
use crate::filter::FilterError;
use crate::filter::debounce::Debouncer;
use crate::filter::matcher::FilterState;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Quiet period applied to search input when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Computes the visible subset of the active category.
///
/// The visible set is stored as indices into the active category's records,
/// so it always preserves source order and never holds copies.
#[derive(Debug)]
pub struct FilterEngine {
    catalog: Catalog,
    active: usize,
    /// Query as typed, before debouncing
    draft: String,
    state: FilterState,
    visible: Vec<usize>,
    revision: u64,
    debouncer: Debouncer<String>,
}

impl FilterEngine {
    /// Create an engine showing the first category unfiltered.
    ///
    /// # Arguments
    /// * `catalog` - Catalogue to browse
    /// * `quiet` - Debounce period for search input
    ///
    /// # Returns
    /// * `Result<FilterEngine, FilterError>` - Engine, or error for an empty catalogue
    pub fn new(catalog: Catalog, quiet: Duration) -> Result<Self, FilterError> {
        if catalog.categories.is_empty() {
            return Err(FilterError::EmptyCatalog);
        }

        let mut engine = Self {
            catalog,
            active: 0,
            draft: String::new(),
            state: FilterState::default(),
            visible: Vec::new(),
            revision: 0,
            debouncer: Debouncer::new(quiet),
        };
        engine.recompute();
        Ok(engine)
    }

    /// All categories, in tab order.
    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    /// Currently active category.
    pub fn active_category(&self) -> &Category {
        &self.catalog.categories[self.active]
    }

    /// Index of the active category.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Switch to another category.
    ///
    /// # Arguments
    /// * `name` - Category name
    ///
    /// # Returns
    /// * `Result<(), FilterError>` - Error if no category has this name
    ///
    /// # Details
    /// Filter groups are specific to each category, so the query, the
    /// selections and any pending debounced query are all discarded.
    pub fn set_active_category(&mut self, name: &str) -> Result<(), FilterError> {
        let index = self
            .catalog
            .position(name)
            .ok_or_else(|| FilterError::UnknownCategory(name.to_string()))?;

        self.debouncer.cancel();
        self.active = index;
        self.draft.clear();
        self.state = FilterState::default();
        debug!(category = name, "switched category");
        self.recompute();
        Ok(())
    }

    /// Update the search input; the filter follows after the quiet period.
    ///
    /// Must be called within a tokio runtime.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.debouncer.schedule(self.draft.clone());
    }

    /// Apply the search input immediately, skipping the quiet period.
    ///
    /// # Returns
    /// * `bool` - True if the visible set was recomputed
    pub fn flush_query(&mut self) -> bool {
        self.debouncer.cancel();
        let draft = self.draft.clone();
        self.apply_query(draft)
    }

    /// Apply a debounced query whose quiet period has elapsed.
    ///
    /// # Returns
    /// * `bool` - True if the visible set was recomputed
    ///
    /// # Details
    /// Called on every tick of the event loop.
    pub fn apply_pending(&mut self) -> bool {
        match self.debouncer.take_ready() {
            Some(query) => self.apply_query(query),
            None => false,
        }
    }

    fn apply_query(&mut self, query: String) -> bool {
        if query == self.state.query {
            return false;
        }
        self.state.query = query;
        self.recompute();
        true
    }

    /// Toggle a value in a filter group's selection.
    ///
    /// # Arguments
    /// * `group` - Filter group name of the active category
    /// * `value` - Value to add or remove
    ///
    /// # Returns
    /// * `bool` - False if the active category has no such group
    ///
    /// # Details
    /// Values are not checked against the group's declared values; an
    /// undeclared value simply matches no record.
    pub fn toggle_filter_value(&mut self, group: &str, value: &str) -> bool {
        if self.active_category().group(group).is_none() {
            warn!(
                category = %self.active_category().name,
                group,
                "ignoring toggle for unknown filter group"
            );
            return false;
        }

        let selected = self.state.selections.entry(group.to_string()).or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        if selected.is_empty() {
            self.state.selections.remove(group);
        }

        debug!(group, value, "toggled filter value");
        self.recompute();
        true
    }

    /// Reset query and every selection.
    pub fn clear_all(&mut self) {
        self.debouncer.cancel();
        self.draft.clear();
        self.state = FilterState::default();
        self.recompute();
    }

    /// Visible records, in source order.
    pub fn visible(&self) -> Vec<&Record> {
        let records = &self.active_category().records;
        self.visible.iter().map(|&i| &records[i]).collect()
    }

    /// Visible record at a position of the visible set.
    pub fn visible_at(&self, index: usize) -> Option<&Record> {
        self.visible
            .get(index)
            .map(|&i| &self.active_category().records[i])
    }

    /// Number of visible records.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Number of records in the active category.
    pub fn total_len(&self) -> usize {
        self.active_category().records.len()
    }

    /// Search input as typed.
    pub fn draft_query(&self) -> &str {
        &self.draft
    }

    /// Query currently used for filtering.
    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Whether typed input is still waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Selected values of a group, if any.
    pub fn selection(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.state.selections.get(group)
    }

    /// Whether a value is selected in a group.
    pub fn is_selected(&self, group: &str, value: &str) -> bool {
        self.selection(group)
            .is_some_and(|selected| selected.contains(value))
    }

    /// Number of selected values across all groups.
    pub fn active_filter_count(&self) -> usize {
        self.state.selected_count()
    }

    /// Number of times the visible set has been computed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        let category = &self.catalog.categories[self.active];
        self.visible = category
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.state.matches(category, record))
            .map(|(index, _)| index)
            .collect();
        self.revision += 1;

        debug!(
            category = %category.name,
            query = %self.state.query,
            filters = self.state.selected_count(),
            visible = self.visible.len(),
            total = category.records.len(),
            "recomputed visible set"
        );
    }
}

//! Application state management.
//!
//! Manages the filter engine, selection, filter-panel cursor and UI mode.

use crate::catalog::{FilterGroup, Record};
use crate::filter::FilterEngine;
use std::cmp;
use tracing::{debug, info, warn};

/// Application state and UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal list view
    List,
    /// Search input
    Search,
    /// Filter panel
    Filters,
}

/// Position of the cursor in the filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCursor {
    /// Index of the group in the active category
    pub group: usize,
    /// Index of the value within that group
    pub value: usize,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Search and filter pipeline over the catalogue
    pub engine: FilterEngine,
    /// Currently selected index in the visible set
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Cursor in the filter panel
    pub filter_cursor: FilterCursor,
    /// Whether the detail pane is shown
    pub show_detail: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `engine` - Filter engine positioned on the startup category
    pub fn new(engine: FilterEngine) -> Self {
        Self {
            engine,
            selected_index: 0,
            mode: UiMode::List,
            filter_cursor: FilterCursor::default(),
            show_detail: false,
            status_message: None,
        }
    }

    /// Apply a debounced query whose quiet period has elapsed.
    ///
    /// # Returns
    /// * `bool` - True if the visible set changed
    ///
    /// # Details
    /// Called once per event-loop iteration.
    pub fn tick(&mut self) -> bool {
        let changed = self.engine.apply_pending();
        if changed {
            self.clamp_selection();
            debug!(
                revision = self.engine.revision(),
                visible = self.engine.visible_len(),
                "applied debounced query"
            );
        }
        changed
    }

    /// Keep the selection inside the visible set.
    fn clamp_selection(&mut self) {
        self.selected_index = cmp::min(
            self.selected_index,
            self.engine.visible_len().saturating_sub(1),
        );
    }

    /// Move selection up.
    ///
    /// # Details
    /// Decrements selected index, wrapping to bottom if at top.
    pub fn move_up(&mut self) {
        let len = self.engine.visible_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down.
    ///
    /// # Details
    /// Increments selected index, wrapping to top if at bottom.
    pub fn move_down(&mut self) {
        let len = self.engine.visible_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Select a visible record by position.
    ///
    /// # Returns
    /// * `bool` - False if the position is outside the visible set
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.engine.visible_len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Get the currently selected record.
    pub fn selected_record(&self) -> Option<&Record> {
        self.engine.visible_at(self.selected_index)
    }

    /// Add a character to the search query.
    ///
    /// # Details
    /// Only works in Search mode. The filter follows after the debounce period.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            let mut query = self.engine.draft_query().to_string();
            query.push(ch);
            self.engine.set_query(query);
        }
    }

    /// Remove last character from search query.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            let mut query = self.engine.draft_query().to_string();
            if query.pop().is_some() {
                self.engine.set_query(query);
            }
        }
    }

    /// Apply the typed query immediately and leave Search mode.
    pub fn submit_search(&mut self) {
        if self.engine.flush_query() {
            self.clamp_selection();
        }
        self.mode = UiMode::List;
    }

    /// Reset query and every filter selection.
    pub fn clear_all(&mut self) {
        self.engine.clear_all();
        self.clamp_selection();
        self.set_status("Cleared search and filters".to_string());
    }

    /// Switch to the category at a tab position.
    ///
    /// # Details
    /// Resets selection, filter cursor and detail pane.
    pub fn select_category(&mut self, index: usize) {
        let Some(name) = self.engine.categories().get(index).map(|c| c.name.clone()) else {
            return;
        };

        match self.engine.set_active_category(&name) {
            Ok(()) => {
                self.selected_index = 0;
                self.filter_cursor = FilterCursor::default();
                self.show_detail = false;
                info!(category = %name, "opened category");
                let label = self.engine.active_category().label.clone();
                self.set_status(format!("{} ({} records)", label, self.engine.total_len()));
            }
            Err(e) => {
                warn!(error = %e, "category switch failed");
                self.set_status(e.to_string());
            }
        }
    }

    /// Switch to the next category, wrapping around.
    pub fn next_category(&mut self) {
        let count = self.engine.categories().len();
        self.select_category((self.engine.active_index() + 1) % count);
    }

    /// Switch to the previous category, wrapping around.
    pub fn previous_category(&mut self) {
        let count = self.engine.categories().len();
        self.select_category((self.engine.active_index() + count - 1) % count);
    }

    /// Filter group under the cursor.
    pub fn cursor_group(&self) -> Option<&FilterGroup> {
        self.engine
            .active_category()
            .groups
            .get(self.filter_cursor.group)
    }

    /// Move the filter cursor to the previous group.
    pub fn cursor_left(&mut self) {
        let count = self.engine.active_category().groups.len();
        if count == 0 {
            return;
        }
        self.filter_cursor.group = (self.filter_cursor.group + count - 1) % count;
        self.filter_cursor.value = 0;
    }

    /// Move the filter cursor to the next group.
    pub fn cursor_right(&mut self) {
        let count = self.engine.active_category().groups.len();
        if count == 0 {
            return;
        }
        self.filter_cursor.group = (self.filter_cursor.group + 1) % count;
        self.filter_cursor.value = 0;
    }

    /// Move the filter cursor to the previous value of its group.
    pub fn cursor_up(&mut self) {
        let Some(count) = self.cursor_group().map(|g| g.values.len()) else {
            return;
        };
        if count > 0 {
            self.filter_cursor.value = (self.filter_cursor.value + count - 1) % count;
        }
    }

    /// Move the filter cursor to the next value of its group.
    pub fn cursor_down(&mut self) {
        let Some(count) = self.cursor_group().map(|g| g.values.len()) else {
            return;
        };
        if count > 0 {
            self.filter_cursor.value = (self.filter_cursor.value + 1) % count;
        }
    }

    /// Toggle the value under the filter cursor.
    pub fn toggle_at_cursor(&mut self) {
        let Some((group, value)) = self.cursor_group().and_then(|g| {
            g.values
                .get(self.filter_cursor.value)
                .map(|v| (g.name.clone(), v.clone()))
        }) else {
            return;
        };

        if self.engine.toggle_filter_value(&group, &value) {
            self.clamp_selection();
            self.set_status(format!(
                "{} of {} records match",
                self.engine.visible_len(),
                self.engine.total_len()
            ));
        }
    }

    /// Toggle the detail pane.
    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

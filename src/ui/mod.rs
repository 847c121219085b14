//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod detail;
pub mod filters;
pub mod list;
pub mod search;
pub mod status;
pub mod tabs;

pub use detail::render_detail;
pub use filters::render_filters;
pub use list::render_list;
pub use search::render_search;
pub use status::render_status;
pub use tabs::render_tabs;

use crate::app::{App, UiMode};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiAreas {
    pub tabs: Rect,
    pub search: Rect,
    pub filters: Rect,
    pub list: Rect,
    /// Empty when the detail pane is hidden
    pub detail: Rect,
    pub status: Rect,
}

/// Split the screen into its regions.
///
/// # Details
/// The filter panel grows with the number of filter groups of the active
/// category; the detail pane takes the right half of the body when shown.
pub fn layout(area: Rect, app: &App) -> UiAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Tabs
            Constraint::Length(3),                        // Search bar
            Constraint::Length(filter_panel_height(app)), // Filters
            Constraint::Min(0),                           // Record list
            Constraint::Length(1),                        // Status bar
        ])
        .split(area);

    let (list, detail) = if app.show_detail {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        (body[0], body[1])
    } else {
        (chunks[3], Rect::default())
    };

    UiAreas {
        tabs: chunks[0],
        search: chunks[1],
        filters: chunks[2],
        list,
        detail,
        status: chunks[4],
    }
}

fn filter_panel_height(app: &App) -> u16 {
    let groups = app.engine.active_category().groups.len().max(1) as u16;
    let help = if app.mode == UiMode::Filters { 1 } else { 0 };
    groups + help + 2
}

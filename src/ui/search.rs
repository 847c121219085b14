//! Search widget rendering.
//!
//! Displays the search input bar.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the search widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the query as typed; a trailing marker indicates input still
/// waiting for the debounce period.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Search;
    let prompt = if is_active {
        "Search: "
    } else {
        "Search (press '/'): "
    };

    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::styled(
            app.engine.draft_query(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ),
        Span::styled(
            if is_active { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ];
    if app.engine.is_pending() {
        spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}

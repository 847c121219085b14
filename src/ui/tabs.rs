//! Tabs widget rendering.
//!
//! Displays one tab per catalogue category.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays the categories horizontally, numbered for the `1`-`9` shortcuts,
/// and highlights the active one.
pub fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let active = app.engine.active_index();

    let mut spans = Vec::new();
    for (i, category) in app.engine.categories().iter().enumerate() {
        let is_active = i == active;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let tab_text = if is_active {
            format!("▶ {} {} ◀", i + 1, category.label)
        } else {
            format!("  {} {}  ", i + 1, category.label)
        };
        spans.push(Span::styled(tab_text, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title("Catalogue (Tab / Shift-Tab)")
                .borders(Borders::ALL),
        )
        .alignment(ratatui::layout::Alignment::Center);

    Widget::render(paragraph, area, buf);
}

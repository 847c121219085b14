//! Status bar rendering.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEY_HINTS: &str =
    "'q' quit, '/' search, 'f' filters, 'c' clear, Tab next category, Enter details";

/// Render the status bar: visible/total counter, then the status message
/// or the key hints.
pub fn render_status(app: &App, area: Rect, buf: &mut Buffer) {
    let counts = format!(
        " {}/{} ",
        app.engine.visible_len(),
        app.engine.total_len()
    );
    let text = app.status_message.as_deref().unwrap_or(KEY_HINTS);

    let line = Line::from(vec![
        Span::styled(counts, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(text),
    ]);

    Widget::render(Paragraph::new(line), area, buf);
}

//! Detail pane rendering.

use crate::app::App;
use crate::ui::list::score_color;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render every field of the selected record.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_detail(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title("Details (Enter to close)")
        .borders(Borders::ALL);

    let Some(record) = app.selected_record() else {
        Widget::render(
            Paragraph::new("Nothing selected").block(block),
            area,
            buf,
        );
        return;
    };

    let label = Style::default().fg(Color::Cyan);
    let mut lines = vec![
        Line::from(Span::styled(
            record.title.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::raw(record.id.as_str()),
        ]),
    ];

    if let Some(score) = record.score {
        lines.push(Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(score.to_string(), Style::default().fg(score_color(score))),
        ]));
    }
    if let Some(updated) = record.format_updated() {
        lines.push(Line::from(vec![
            Span::styled("Updated: ", label),
            Span::raw(updated),
        ]));
    }

    let category = app.engine.active_category();
    for (name, value) in &record.fields {
        let title = category
            .group(name)
            .map_or(name.as_str(), |g| g.label.as_str());
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", title), label),
            Span::raw(value.display()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(record.description.as_str()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    Widget::render(paragraph, area, buf);
}

//! Record list widget rendering.
//!
//! Displays a scrollable list of records with selection highlighting.

use crate::app::App;
use crate::catalog::{HealthBand, Record};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Lines each record occupies (title, attributes, description, separator).
pub const LINES_PER_RECORD: u16 = 4;

/// Render the record list widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each record takes [`LINES_PER_RECORD`] lines:
/// - Line 1: Title (bold) with score and update date
/// - Line 2: Attributes (`name: value | ...`)
/// - Line 3: Description
/// - Line 4: Separator
///
/// Keeps the selected record centered where possible.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let engine = &app.engine;
    let visible_len = engine.visible_len();
    let mut title = format!(
        "{} ({}/{})",
        engine.active_category().label,
        visible_len,
        engine.total_len()
    );
    if !engine.query().trim().is_empty() {
        title.push_str(&format!(" matching \"{}\"", engine.query().trim()));
    }

    if visible_len == 0 {
        let list = List::new(vec![ListItem::new(Span::styled(
            "No matching records. Press 'c' to clear search and filters.",
            Style::default().fg(Color::Gray),
        ))])
        .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(visible_len.saturating_sub(1));

    let separator_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(separator_width);

    let visible_rows = rows_in(area);
    let scroll_offset = scroll_offset(selected_index, visible_len, area);

    let items: Vec<ListItem> = engine
        .visible()
        .into_iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(idx, record)| {
            let is_selected = idx == selected_index;
            record_item(record, is_selected, &separator_line)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index - scroll_offset));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}

/// Number of whole records that fit inside the bordered area.
fn rows_in(area: Rect) -> usize {
    let available_height = area.height.saturating_sub(2); // Account for borders
    (available_height / LINES_PER_RECORD).max(1) as usize
}

/// Index of the first record drawn, keeping the selection centered.
///
/// # Arguments
/// * `selected` - Selected index in the visible set
/// * `len` - Size of the visible set
/// * `area` - List area including borders
pub fn scroll_offset(selected: usize, len: usize, area: Rect) -> usize {
    let rows = rows_in(area);
    selected
        .saturating_sub(rows / 2)
        .min(len.saturating_sub(rows))
}

fn record_item<'a>(record: &'a Record, is_selected: bool, separator: &str) -> ListItem<'a> {
    let title_style = Style::default()
        .fg(if is_selected {
            Color::Yellow
        } else {
            Color::White
        })
        .add_modifier(Modifier::BOLD);

    let mut title_spans = vec![Span::styled(record.title.as_str(), title_style)];
    if let Some(score) = record.score {
        title_spans.push(Span::styled(
            format!("  [{}]", score),
            Style::default().fg(score_color(score)),
        ));
    }
    if let Some(updated) = record.format_updated() {
        title_spans.push(Span::styled(
            format!("  {}", updated),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let attributes = record
        .fields
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.display()))
        .collect::<Vec<_>>()
        .join(" | ");

    let separator_style = if is_selected {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    ListItem::new(vec![
        Line::from(title_spans),
        Line::from(Span::styled(attributes, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            record.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(separator.to_string(), separator_style)),
    ])
}

/// Color for a 0-100 score, following the health bands.
pub fn score_color(score: u8) -> Color {
    match HealthBand::from_score(score) {
        HealthBand::Healthy => Color::Green,
        HealthBand::AtRisk => Color::Yellow,
        HealthBand::Critical => Color::Red,
    }
}

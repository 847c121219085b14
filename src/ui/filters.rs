//! Filters widget rendering.
//!
//! Displays the filter groups of the active category and their selections.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Gap after each value.
const SEPARATOR: &str = "  ";
/// Marker for values scrolled off to the left.
const MORE: &str = "… ";

/// Render the filters widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// One line per filter group, each value shown as a checkbox. In filter
/// mode the value under the cursor is highlighted, and its line scrolls
/// sideways when the cursor would fall past the right edge.
pub fn render_filters(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Filters;
    let category = app.engine.active_category();
    let mut lines = vec![];

    let inner_width = area.width.saturating_sub(2) as usize;

    for (group_idx, group) in category.groups.iter().enumerate() {
        let label = Span::styled(
            format!("{}: ", group.label),
            Style::default().fg(Color::Cyan),
        );

        let values: Vec<Span> = group
            .values
            .iter()
            .enumerate()
            .map(|(value_idx, value)| {
                let checked = app.engine.is_selected(&group.name, value);
                let under_cursor = is_active
                    && app.filter_cursor.group == group_idx
                    && app.filter_cursor.value == value_idx;

                let mut style =
                    Style::default().fg(if checked { Color::Green } else { Color::White });
                if under_cursor {
                    style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                }

                let mark = if checked { "[x]" } else { "[ ]" };
                Span::styled(format!("{} {}{}", mark, value, SEPARATOR), style)
            })
            .collect();

        // Scroll the cursor row so the highlighted value stays on screen
        let first = if is_active && app.filter_cursor.group == group_idx {
            let widths: Vec<usize> = values.iter().map(Span::width).collect();
            let available = inner_width.saturating_sub(label.width());
            first_visible_value(&widths, app.filter_cursor.value, available)
        } else {
            0
        };

        let mut spans = vec![label];
        if first > 0 {
            spans.push(Span::styled(MORE, Style::default().fg(Color::Gray)));
        }
        spans.extend(values.into_iter().skip(first));
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No filters for this category",
            Style::default().fg(Color::Gray),
        )));
    }

    if is_active {
        lines.push(Line::from(Span::styled(
            "←/→ group, ↑/↓ value, Space toggle, 'c' clear all, 'Esc' or 'f' to exit",
            Style::default().fg(Color::Yellow),
        )));
    }

    let count = app.engine.active_filter_count();
    let title = if is_active {
        format!("Filters ({} selected) (ACTIVE)", count)
    } else {
        format!("Filters ({} selected) (press 'f')", count)
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}

/// First value to draw so that the cursor value fits in `available` columns.
///
/// # Arguments
/// * `widths` - Display width of each value, separator included
/// * `cursor` - Index of the value under the cursor
/// * `available` - Columns left after the group label
fn first_visible_value(widths: &[usize], cursor: usize, available: usize) -> usize {
    let cursor = cursor.min(widths.len().saturating_sub(1));
    let more = Span::raw(MORE).width();
    let mut start = 0;
    while start < cursor {
        let marker = if start > 0 { more } else { 0 };
        if widths[start..=cursor].iter().sum::<usize>() + marker <= available {
            break;
        }
        start += 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::FilterEngine;
    use crate::filter::engine::DEFAULT_DEBOUNCE;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_first_visible_value() {
        // Everything fits
        assert_eq!(first_visible_value(&[10, 10, 10], 2, 40), 0);
        // Cursor near the start never scrolls
        assert_eq!(first_visible_value(&[10, 10, 10, 10], 0, 25), 0);
        // Last value needs the first two dropped plus the marker
        assert_eq!(first_visible_value(&[10, 10, 10, 10], 3, 25), 2);
        // Too narrow for anything but the cursor value itself
        assert_eq!(first_visible_value(&[10, 10, 10], 2, 4), 2);
        assert_eq!(first_visible_value(&[], 0, 10), 0);
    }

    #[test]
    fn test_cursor_value_visible_in_narrow_panel() {
        let engine = FilterEngine::new(Catalog::builtin(), DEFAULT_DEBOUNCE).unwrap();
        let mut app = App::new(engine);
        app.select_category(1);
        app.mode = UiMode::Filters;
        app.filter_cursor = crate::app::FilterCursor { group: 2, value: 4 };

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        render_filters(&app, area, &mut buf);

        let technologies = row_text(&buf, 3);
        assert!(technologies.contains("Technologies: …"), "{technologies}");
        assert!(technologies.contains("[ ] PostgreSQL"), "{technologies}");

        // Rows without the cursor keep their first value
        assert!(row_text(&buf, 1).contains("[ ] healthy"));
    }
}

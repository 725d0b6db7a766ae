use std::error::Error;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Fruit;

/// Label used for fruits whose name is the empty string.
const EMPTY_NAME_LABEL: &str = "<empty>";

/// Render one list row. Empty names still get a visible, dimmed row so they
/// can be selected, renamed, or deleted.
pub(crate) fn fruit_line(fruit: &Fruit) -> Line<'static> {
    if fruit.name.is_empty() {
        Line::from(Span::styled(
            EMPTY_NAME_LABEL,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(fruit.name.clone())
    }
}

/// Move `selected` by `offset` inside `0..len`, saturating at both ends.
pub(crate) fn shift_selection(selected: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len as isize - 1;
    (selected as isize + offset).clamp(0, last) as usize
}

/// Column of the text cursor after `prefix` label characters and `len` typed
/// characters, pinned to the last cell of a row `width` wide.
pub(crate) fn cursor_offset(prefix: usize, len: usize, width: u16) -> u16 {
    let column = u16::try_from(prefix.saturating_add(len)).unwrap_or(u16::MAX);
    column.min(width.saturating_sub(1))
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Footer text for an error: the outermost message, followed by the innermost
/// cause when the chain has more than one link.
pub(crate) fn surface_error(err: &(dyn Error + 'static)) -> String {
    let Some(mut cause) = err.source() else {
        return err.to_string();
    };
    while let Some(next) = cause.source() {
        cause = next;
    }
    format!("{err}: {cause}")
}

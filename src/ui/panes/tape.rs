//! Tape pane rendering
//!
//! Shows the machine's cells as rows of fixed-width values with their indices.
//! The row holding the pointer is kept in view unless the user scrolls away,
//! and the cell under the pointer is highlighted.

use crate::memory::Tape;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Width of one rendered cell: three digits and a separating space
const CELL_WIDTH: usize = 4;

/// Width of the row label, e.g. `0000 │ `
const LABEL_WIDTH: usize = 7;

/// Scroll state for the tape pane
pub struct TapeScrollState {
    /// First visible row
    pub offset: usize,
    /// Follow the pointer row when it moves
    pub follow_pointer: bool,
}

impl Default for TapeScrollState {
    fn default() -> Self {
        TapeScrollState {
            offset: 0,
            follow_pointer: true,
        }
    }
}

/// Number of cells that fit on one row of the given inner width
pub fn cells_per_row(inner_width: usize) -> usize {
    (inner_width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).max(1)
}

/// Render the tape pane
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    tape: &Tape,
    pointer: usize,
    is_focused: bool,
    scroll_state: &mut TapeScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Tape ({} cells, ptr {}) ", tape.len(), pointer))
        .borders(Borders::ALL)
        .border_style(border_style);

    let per_row = cells_per_row(area.width.saturating_sub(2) as usize);
    let total_rows = tape.len().div_ceil(per_row);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let pointer_row = pointer / per_row;

    if scroll_state.follow_pointer
        && (pointer_row < scroll_state.offset || pointer_row >= scroll_state.offset + visible_height)
    {
        scroll_state.offset = pointer_row.saturating_sub(visible_height / 2);
    }
    let max_scroll = total_rows.saturating_sub(visible_height);
    scroll_state.offset = scroll_state.offset.min(max_scroll);

    let items: Vec<ListItem> = (scroll_state.offset..total_rows)
        .take(visible_height)
        .map(|row| {
            let start = row * per_row;
            let end = (start + per_row).min(tape.len());

            let mut spans = vec![Span::styled(
                format!("{:04} │ ", start),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            for (index, value) in tape.cells()[start..end].iter().enumerate() {
                spans.push(cell_span(start + index, *value, pointer));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn cell_span(index: usize, value: u8, pointer: usize) -> Span<'static> {
    let text = format!("{:>3} ", value);
    if index == pointer {
        Span::styled(
            text,
            Style::default()
                .bg(DEFAULT_THEME.pointer_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else if value == 0 {
        Span::styled(text, Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Span::styled(text, Style::default().fg(DEFAULT_THEME.number))
    }
}

//! Command prompt rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input line and place the terminal cursor after the typed text
pub fn render_prompt(frame: &mut Frame, area: Rect, command_number: usize, input: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let label = format!("[{}] ", command_number);
    let label_width = label.chars().count();

    // Keep the tail of long inputs visible.
    let inner_width = area.width.saturating_sub(2) as usize;
    let available = inner_width.saturating_sub(label_width + 1).max(1);
    let input_len = input.chars().count();
    let visible: String = input.chars().skip(input_len.saturating_sub(available)).collect();
    let cursor_x = (label_width + visible.chars().count()) as u16;

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(DEFAULT_THEME.prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(visible, Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
    frame.set_cursor_position(Position::new(area.x + 1 + cursor_x, area.y + 1));
}

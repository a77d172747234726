//! Status bar rendering with keybindings and machine state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Machine state shown on the left of the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub program_len: usize,
    pub program_counter: usize,
    pub steps_executed: u64,
    pub is_error: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let state_text = format!(
        " pc {}/{} · {} steps ",
        data.program_counter.min(data.program_len),
        data.program_len,
        data.steps_executed
    );

    let left_spans = vec![
        Span::styled(
            state_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(" run ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" PgUp/PgDn ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}

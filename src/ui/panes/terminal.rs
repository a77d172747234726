//! Session transcript pane rendering

use crate::ui::session::{LineKind, TranscriptLine};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the transcript of commands, messages and program output.
///
/// `scroll_offset` is clamped to the content; `usize::MAX` pins the view to the
/// newest line.
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &[TranscriptLine],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Session ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if transcript.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = transcript
        .iter()
        .map(|line| ListItem::new(line.text.as_str()).style(line_style(line.kind)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Prompt => Style::default()
            .fg(DEFAULT_THEME.prompt)
            .add_modifier(Modifier::BOLD),
        LineKind::Output => Style::default().fg(DEFAULT_THEME.fg),
        LineKind::Info => Style::default().fg(DEFAULT_THEME.comment),
        LineKind::Error => Style::default().fg(DEFAULT_THEME.error),
    }
}

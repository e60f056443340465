//! Message log panel.

use client_frontend_core::message::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Newest message at the bottom, as many as fit inside the borders.
pub fn render(frame: &mut Frame, area: Rect, log: &MessageLog, theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = log
        .recent(visible)
        .map(|entry| {
            Line::from(Span::styled(
                entry.text.clone(),
                theme.style_message(entry.level),
            ))
        })
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}

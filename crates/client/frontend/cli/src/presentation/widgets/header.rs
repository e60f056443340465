//! Header widget displaying the current mode and the message count.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use runtime::AppMode;

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, mode: AppMode, messages: usize, theme: &RatatuiTheme) {
    let text = Line::from(vec![
        Span::raw("Mode: "),
        Span::styled(mode.to_string().to_uppercase(), theme.style_mode(mode)),
        Span::raw(" | Messages: "),
        Span::styled(messages.to_string(), Style::default().fg(Color::Yellow)),
    ]);

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Dark World"));

    frame.render_widget(paragraph, area);
}

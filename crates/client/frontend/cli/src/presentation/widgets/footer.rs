//! Key hints for the active mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};
use runtime::AppMode;

pub fn hint(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Menu => "Up/Down: select | Enter: confirm | Esc: quit",
        AppMode::Settings => "Up/Down: select | Left/Right: adjust | Esc: back",
        AppMode::Credits => "Enter/Esc: back",
        AppMode::Playing => "Arrows/WASD: move | B: battle | Esc: menu",
        AppMode::Battling => "Space/Enter: act | B: leave | Esc: menu",
    }
}

pub fn render(frame: &mut Frame, area: Rect, mode: AppMode) {
    let paragraph = Paragraph::new(hint(mode)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

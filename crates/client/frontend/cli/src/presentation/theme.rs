//! Ratatui styling for the terminal UI.

use client_frontend_core::message::MessageLevel;
use game_core::Color as GameColor;
use ratatui::style::{Color, Modifier, Style};
use runtime::AppMode;

/// Consistent color scheme and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    /// Font size from which scene text is drawn bold.
    pub const HEADING_SIZE: u16 = 48;

    pub fn new() -> Self {
        Self
    }

    /// True-color terminal color for a scene color.
    pub fn color(&self, color: GameColor) -> Color {
        Color::Rgb(color.r, color.g, color.b)
    }

    /// Style for scene text drawn at `size`.
    pub fn text(&self, color: GameColor, size: u16) -> Style {
        let style = Style::default().fg(self.color(color));
        if size >= Self::HEADING_SIZE {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn style_mode(&self, mode: AppMode) -> Style {
        let color = match mode {
            AppMode::Menu | AppMode::Settings | AppMode::Credits => Color::Cyan,
            AppMode::Playing => Color::LightGreen,
            AppMode::Battling => Color::LightRed,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

use std::f32::consts::TAU;

use super::{Menu, MenuError, MenuItem};
use crate::config::GameConfig;
use crate::input::InputEvent;
use crate::state::{Color, Position};

/// Action tags of the title screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MainMenuAction {
    Start,
    Settings,
    Credits,
    Quit,
}

/// Title screen: four entries under a pulsing title.
#[derive(Clone, Debug, PartialEq)]
pub struct MainMenu {
    menu: Menu<MainMenuAction>,
    pulse: f32,
    title_position: Position,
}

impl MainMenu {
    pub const TITLE: &'static str = "Dark World";
    pub const TITLE_SIZE: u16 = 72;
    /// Radians the title pulse advances per frame.
    pub const PULSE_SPEED: f32 = 0.05;

    pub fn new(config: &GameConfig) -> Result<Self, MenuError> {
        let center_x = config.playfield_width / 2;
        let menu = Menu::new([
            MenuItem::new("Start Game", MainMenuAction::Start, Position::new(center_x, 250)),
            MenuItem::new("Settings", MainMenuAction::Settings, Position::new(center_x, 350)),
            MenuItem::new("Credits", MainMenuAction::Credits, Position::new(center_x, 450)),
            MenuItem::new("Quit", MainMenuAction::Quit, Position::new(center_x, 550)),
        ])?;

        Ok(Self {
            menu,
            pulse: 0.0,
            title_position: Position::new(center_x, 120),
        })
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Option<MainMenuAction> {
        self.menu.handle_input(event)
    }

    /// Advances the title pulse and refreshes item highlighting.
    pub fn update(&mut self) {
        self.pulse = (self.pulse + Self::PULSE_SPEED) % TAU;
        self.menu.refresh_highlight();
    }

    pub fn menu(&self) -> &Menu<MainMenuAction> {
        &self.menu
    }

    /// Pulse phase in radians, in `[0, 2*pi)`.
    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    pub fn title_position(&self) -> Position {
        self.title_position
    }

    /// Gold that brightens toward a pale yellow as the pulse peaks.
    pub fn title_color(&self) -> Color {
        let factor = (self.pulse.sin() + 1.0) / 2.0;
        Color::rgb(255, (215.0 + 40.0 * factor) as u8, (40.0 * factor) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_entries_in_order() {
        let menu = MainMenu::new(&GameConfig::default()).unwrap();
        let labels: Vec<&str> = menu.menu().items().iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Start Game", "Settings", "Credits", "Quit"]);
        assert_eq!(menu.menu().items()[0].position, Position::new(400, 250));
    }

    #[test]
    fn action_tags_are_lowercase() {
        assert_eq!(MainMenuAction::Start.to_string(), "start");
        assert_eq!(MainMenuAction::Quit.to_string(), "quit");
    }

    #[test]
    fn pulse_wraps_and_colors_stay_gold() {
        let mut menu = MainMenu::new(&GameConfig::default()).unwrap();
        assert_eq!(menu.title_color(), Color::rgb(255, 235, 20));

        for _ in 0..1_000 {
            menu.update();
            assert!((0.0..TAU).contains(&menu.pulse()));
            let color = menu.title_color();
            assert_eq!(color.r, 255);
            assert!(color.g >= 215);
            assert!(color.b <= 40);
        }
    }

    #[test]
    fn up_from_start_selects_quit() {
        let mut menu = MainMenu::new(&GameConfig::default()).unwrap();
        menu.handle_input(InputEvent::Up);
        assert_eq!(menu.handle_input(InputEvent::Confirm), Some(MainMenuAction::Quit));
    }
}

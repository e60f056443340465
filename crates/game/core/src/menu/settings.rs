use std::fmt;

use super::{Menu, MenuError, MenuItem};
use crate::config::GameConfig;
use crate::input::InputEvent;
use crate::state::Position;

/// Difficulty levels, ordered from easiest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Next level up, wrapping from `Hard` to `Easy`.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Next level down, wrapping from `Easy` to `Hard`.
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self as usize + len - 1) % len]
    }
}

/// Percentage volume, always a value in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Volume {
    pub const MAX: u8 = 100;
    pub const STEP: u8 = 10;

    /// Clamps `percent` to the valid range.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn increased(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Player preferences edited on the settings screen. Not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub music_volume: Volume,
    pub sound_effects: Volume,
    pub screen_shake: bool,
    pub difficulty: Difficulty,
}

impl Settings {
    pub const DEFAULT_MUSIC_VOLUME: u8 = 70;
    pub const DEFAULT_SOUND_VOLUME: u8 = 80;

    /// Current value of the setting an entry edits; `None` for `Back`.
    pub fn value(&self, action: SettingsAction) -> Option<SettingValue> {
        match action {
            SettingsAction::Music => Some(SettingValue::Volume(self.music_volume)),
            SettingsAction::Sound => Some(SettingValue::Volume(self.sound_effects)),
            SettingsAction::Shake => Some(SettingValue::Toggle(self.screen_shake)),
            SettingsAction::Difficulty => Some(SettingValue::Difficulty(self.difficulty)),
            SettingsAction::Back => None,
        }
    }

    /// Applies one Left/Right step to `action`'s setting.
    ///
    /// Returns the new value, or `None` when the entry has nothing to adjust.
    pub fn adjust(&mut self, action: SettingsAction, increase: bool) -> Option<SettingValue> {
        match action {
            SettingsAction::Music => self.music_volume = step_volume(self.music_volume, increase),
            SettingsAction::Sound => {
                self.sound_effects = step_volume(self.sound_effects, increase)
            }
            SettingsAction::Shake => self.screen_shake = !self.screen_shake,
            SettingsAction::Difficulty => {
                self.difficulty = if increase {
                    self.difficulty.next()
                } else {
                    self.difficulty.previous()
                }
            }
            SettingsAction::Back => return None,
        }
        self.value(action)
    }
}

fn step_volume(volume: Volume, increase: bool) -> Volume {
    if increase {
        volume.increased()
    } else {
        volume.decreased()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: Volume::new(Self::DEFAULT_MUSIC_VOLUME),
            sound_effects: Volume::new(Self::DEFAULT_SOUND_VOLUME),
            screen_shake: true,
            difficulty: Difficulty::Normal,
        }
    }
}

/// Entries of the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SettingsAction {
    Music,
    Sound,
    Shake,
    Difficulty,
    Back,
}

/// Displayable value of one setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingValue {
    Volume(Volume),
    Toggle(bool),
    Difficulty(Difficulty),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volume(volume) => volume.fmt(f),
            Self::Toggle(true) => f.write_str("On"),
            Self::Toggle(false) => f.write_str("Off"),
            Self::Difficulty(difficulty) => difficulty.fmt(f),
        }
    }
}

/// A setting that was just adjusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingChange {
    pub setting: SettingsAction,
    pub value: SettingValue,
}

/// What a settings-screen input amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsResponse {
    /// Confirm was pressed on an entry.
    Selected(SettingsAction),
    /// Left or Right changed a value.
    Changed(SettingChange),
}

/// Settings screen: a menu of entries plus the values they edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsMenu {
    menu: Menu<SettingsAction>,
    settings: Settings,
}

impl SettingsMenu {
    pub const TITLE: &'static str = "Settings";
    /// Horizontal gap between an entry's anchor and its value.
    pub const VALUE_OFFSET: i32 = 150;

    pub fn new(config: &GameConfig, settings: Settings) -> Result<Self, MenuError> {
        let center_x = config.playfield_width / 2;
        let item = |label, action, y| MenuItem::new(label, action, Position::new(center_x, y));
        let menu = Menu::new([
            item("Music Volume", SettingsAction::Music, 200),
            item("Sound Effects", SettingsAction::Sound, 300),
            item("Screen Shake", SettingsAction::Shake, 400),
            item("Difficulty", SettingsAction::Difficulty, 500),
            item("Back", SettingsAction::Back, 550),
        ])?;

        Ok(Self { menu, settings })
    }

    /// Up/Down navigate, Confirm selects, Left/Right adjust the selection.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SettingsResponse> {
        match event {
            InputEvent::Left => self.adjust(false),
            InputEvent::Right => self.adjust(true),
            _ => self
                .menu
                .handle_input(event)
                .map(SettingsResponse::Selected),
        }
    }

    /// Adjusts whichever setting is currently selected.
    pub fn adjust(&mut self, increase: bool) -> Option<SettingsResponse> {
        let setting = self.menu.selected().action;
        let value = self.settings.adjust(setting, increase)?;
        Some(SettingsResponse::Changed(SettingChange { setting, value }))
    }

    pub fn update(&mut self) {
        self.menu.refresh_highlight();
    }

    pub fn menu(&self) -> &Menu<SettingsAction> {
        &self.menu
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_menu() -> SettingsMenu {
        SettingsMenu::new(&GameConfig::default(), Settings::default()).unwrap()
    }

    fn select(menu: &mut SettingsMenu, index: usize) {
        for _ in 0..index {
            menu.handle_input(InputEvent::Down);
        }
    }

    #[test]
    fn defaults_match_first_launch() {
        let settings = Settings::default();
        assert_eq!(settings.music_volume.percent(), 70);
        assert_eq!(settings.sound_effects.percent(), 80);
        assert!(settings.screen_shake);
        assert_eq!(settings.difficulty, Difficulty::Normal);
    }

    #[test]
    fn volume_saturates_at_both_ends() {
        let mut menu = settings_menu();
        for _ in 0..5 {
            menu.handle_input(InputEvent::Right);
        }
        assert_eq!(menu.settings().music_volume.percent(), 100);

        let mut volume = Volume::new(0);
        for _ in 0..5 {
            volume = volume.decreased();
        }
        assert_eq!(volume.percent(), 0);
        assert_eq!(Volume::new(250).percent(), 100);
    }

    #[test]
    fn shake_toggles_in_either_direction() {
        let mut menu = settings_menu();
        select(&mut menu, 2);

        let response = menu.handle_input(InputEvent::Right);
        assert_eq!(
            response,
            Some(SettingsResponse::Changed(SettingChange {
                setting: SettingsAction::Shake,
                value: SettingValue::Toggle(false),
            }))
        );
        menu.handle_input(InputEvent::Left);
        assert!(menu.settings().screen_shake);
    }

    #[test]
    fn difficulty_cycles_with_wraparound() {
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Hard);

        let mut menu = settings_menu();
        select(&mut menu, 3);
        menu.handle_input(InputEvent::Right);
        menu.handle_input(InputEvent::Right);
        assert_eq!(menu.settings().difficulty, Difficulty::Easy);
    }

    #[test]
    fn back_has_nothing_to_adjust() {
        let mut menu = settings_menu();
        select(&mut menu, 4);
        assert_eq!(menu.handle_input(InputEvent::Left), None);
        assert_eq!(
            menu.handle_input(InputEvent::Confirm),
            Some(SettingsResponse::Selected(SettingsAction::Back))
        );
        assert_eq!(menu.settings(), &Settings::default());
    }

    #[test]
    fn values_render_for_display() {
        let settings = Settings::default();
        let rendered: Vec<String> = [
            SettingsAction::Music,
            SettingsAction::Shake,
            SettingsAction::Difficulty,
        ]
        .into_iter()
        .filter_map(|action| settings.value(action))
        .map(|value| value.to_string())
        .collect();
        assert_eq!(rendered, ["70%", "On", "Normal"]);
        assert_eq!(settings.value(SettingsAction::Back), None);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}

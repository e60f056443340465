//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use runtime::GameEvent;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SHOW_COMBAT_MESSAGES` - Show attacks and defeats (default: true)
    /// - `SHOW_TRANSITION_MESSAGES` - Show screen changes (default: false)
    /// - `SHOW_SETTINGS_MESSAGES` - Show setting adjustments (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        let visibility = &mut config.messages.visibility;
        if let Some(show) = read_env_bool("SHOW_COMBAT_MESSAGES") {
            visibility.show_combat = show;
        }
        if let Some(show) = read_env_bool("SHOW_TRANSITION_MESSAGES") {
            visibility.show_transitions = show;
        }
        if let Some(show) = read_env_bool("SHOW_SETTINGS_MESSAGES") {
            visibility.show_settings = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visibility: MessageVisibility,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visibility: MessageVisibility::default(),
        }
    }
}

/// Controls which runtime events generate visible messages.
#[derive(Clone, Debug)]
pub struct MessageVisibility {
    /// Attacks and defeats (e.g., "Hero hits Warden for 1 damage").
    pub show_combat: bool,
    /// Screen changes (e.g., "menu -> playing").
    pub show_transitions: bool,
    /// Setting adjustments (e.g., "Music volume set to 80%").
    pub show_settings: bool,
}

impl Default for MessageVisibility {
    fn default() -> Self {
        Self {
            show_combat: true,
            show_transitions: false, // The screen itself already changes
            show_settings: true,
        }
    }
}

impl MessageVisibility {
    /// Returns true if messages should be generated for this event.
    pub fn should_show(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::Attacked { .. } | GameEvent::Defeated { .. } => self.show_combat,
            GameEvent::StateChanged { .. } => self.show_transitions,
            GameEvent::SettingChanged(_) => self.show_settings,
            GameEvent::BattleStarted { .. } | GameEvent::BattleEnded { .. } => true,
            GameEvent::QuitRequested => false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::AppMode;

    #[test]
    fn transitions_are_hidden_by_default() {
        let visibility = MessageVisibility::default();
        assert!(!visibility.should_show(&GameEvent::StateChanged {
            from: AppMode::Menu,
            to: AppMode::Playing,
        }));
        assert!(visibility.should_show(&GameEvent::BattleEnded { outcome: None }));
        assert!(!visibility.should_show(&GameEvent::QuitRequested));
    }
}

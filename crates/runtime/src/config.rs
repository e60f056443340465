//! Runtime configuration.

use std::env;
use std::time::Duration;

use game_core::{Difficulty, GameConfig, Settings, Volume};

/// Configuration shared by the application controller and the frame loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Fixed update cadence.
    pub frames_per_second: u32,
    /// Values the settings screen starts with. Changes are not written back.
    pub settings: Settings,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frames_per_second: Self::DEFAULT_FPS,
            settings: Settings::default(),
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_FPS: u32 = 60;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_FPS` - Frames per second (default: 60)
    /// - `GAME_MUSIC_VOLUME` - Initial music volume, 0-100 (default: 70)
    /// - `GAME_SOUND_VOLUME` - Initial sound effects volume, 0-100 (default: 80)
    /// - `GAME_SCREEN_SHAKE` - Initial screen shake toggle (default: true)
    /// - `GAME_DIFFICULTY` - `easy`, `normal` or `hard` (default: normal)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(fps) = read_env::<u32>("GAME_FPS") {
            config.frames_per_second = fps.max(1);
        }
        if let Some(volume) = read_env::<u8>("GAME_MUSIC_VOLUME") {
            config.settings.music_volume = Volume::new(volume);
        }
        if let Some(volume) = read_env::<u8>("GAME_SOUND_VOLUME") {
            config.settings.sound_effects = Volume::new(volume);
        }
        if let Some(shake) = read_env_bool("GAME_SCREEN_SHAKE") {
            config.settings.screen_shake = shake;
        }
        if let Some(difficulty) = read_env::<Difficulty>("GAME_DIFFICULTY") {
            config.settings.difficulty = difficulty;
        }

        config
    }

    /// Wall-clock length of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
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

    #[test]
    fn default_cadence_is_sixty_hertz() {
        let config = RuntimeConfig::default();
        assert_eq!(config.frame_duration(), Duration::from_nanos(16_666_666));
    }
}

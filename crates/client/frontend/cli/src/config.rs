//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `GAME_SESSION_ID` - Name of the log directory for this run
    ///   (default: `session_<unix seconds>`)
    /// - `GAME_LOG_DIR` - Root directory for session logs
    ///   (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(session_id) = read_env::<String>("GAME_SESSION_ID") {
            config.logging.session_id = Some(session_id).filter(|id| !id.is_empty());
        }
        if let Some(dir) = read_env::<PathBuf>("GAME_LOG_DIR") {
            config.logging.log_dir = Some(dir);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Frames a key counts as held after a press when the terminal does not
    /// report releases.
    pub key_hold_frames: u8,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            key_hold_frames: 8,
        }
    }
}

/// Where the file-only log of a session goes.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

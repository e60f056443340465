//! Pure game rules shared by the runtime and every frontend.
//!
//! `game-core` defines the character model, combat arithmetic, per-role
//! behavior policies, the turn-based battle resolver and the menu models. It
//! performs no I/O and does not log: operations return values or events, and
//! the runtime decides what to record or show.
pub mod battle;
pub mod behavior;
pub mod combat;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod state;

pub use battle::{
    Battle, BattleAction, BattleEngine, BattleEvent, BattleEvents, BattleOutcome, BattleStatus,
    Side,
};
pub use behavior::{Behavior, BehaviorContext, PassiveAlly, Patrol, PatrolPhase, PlayerControl};
pub use combat::{MINIMUM_DAMAGE, apply_damage, apply_healing, calculate_damage};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use input::{HeldKeys, InputEvent};
pub use menu::{
    Difficulty, MainMenu, MainMenuAction, Menu, MenuError, MenuItem, SettingChange, SettingValue,
    Settings, SettingsAction, SettingsMenu, SettingsResponse, Volume,
};
pub use state::{
    Actor, Character, CharacterStats, CharacterTemplate, Color, Position, Rect, ResourceMeter,
    Role, Roster, Velocity,
};

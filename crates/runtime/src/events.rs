//! Events the application controller emits for logs and frontends.
//!
//! Events are queued while a frame is processed and drained by the frame loop
//! once the frame is drawn. They describe what happened; nothing reacts to
//! them inside the runtime.

use game_core::{BattleOutcome, SettingChange, Side};

/// Observable top-level state of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AppMode {
    Menu,
    Settings,
    Credits,
    Playing,
    Battling,
}

impl AppMode {
    /// Returns true while characters exist.
    pub fn in_session(self) -> bool {
        matches!(self, Self::Playing | Self::Battling)
    }
}

/// Why a battle started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BattleTrigger {
    /// The player walked into the enemy.
    Collision,
    /// The battle key was pressed while exploring.
    Toggle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged {
        from: AppMode,
        to: AppMode,
    },

    BattleStarted {
        trigger: BattleTrigger,
    },

    /// The player left the battle screen; `outcome` is `None` if it was
    /// still undecided.
    BattleEnded {
        outcome: Option<BattleOutcome>,
    },

    Attacked {
        attacker: Side,
        attacker_name: &'static str,
        defender_name: &'static str,
        damage: u32,
        remaining_health: u32,
    },

    Defeated {
        side: Side,
        name: &'static str,
        outcome: BattleOutcome,
    },

    SettingChanged(SettingChange),

    QuitRequested,
}

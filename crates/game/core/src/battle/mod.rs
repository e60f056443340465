//! Turn-based battle between the player and the enemy.
//!
//! [`Battle`] is the persistent part of an encounter (whose turn it is, the
//! highlighted action, the outcome). It never owns the combatants: every frame
//! the caller lends both characters to a short-lived [`BattleEngine`], the
//! same way the roster keeps owning them while exploration is paused.
//!
//! # Turn protocol
//!
//! ```text
//! PlayerTurn --confirm + FIGHT--> EnemyTurn --automatic--> PlayerTurn
//!      \                               \
//!       `--enemy health 0--> Ended(Victory)   `--player health 0--> Ended(Defeat)
//! ```
//!
//! A side may only act while it is not marked as attacking. The engine ticks
//! both attack cooldowns itself, so a battle never depends on exploration
//! policies running to make progress.

mod engine;

pub use engine::{BattleEngine, BattleEvents};

use crate::config::GameConfig;
use crate::state::Character;

/// One of the two battle participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Commands offered in the battle panel, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum BattleAction {
    Fight,
    Act,
    Item,
    Mercy,
}

impl BattleAction {
    pub const ALL: [Self; GameConfig::BATTLE_ACTIONS] =
        [Self::Fight, Self::Act, Self::Item, Self::Mercy];

    /// Only `FIGHT` resolves anything; the rest are placeholders.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Fight)
    }
}

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum BattleOutcome {
    /// The enemy's health reached zero.
    Victory,
    /// The player's health reached zero.
    Defeat,
}

impl BattleOutcome {
    /// Outcome of a battle in which `side` was defeated.
    pub const fn for_defeated(side: Side) -> Self {
        match side {
            Side::Player => Self::Defeat,
            Side::Enemy => Self::Victory,
        }
    }
}

/// Observable state of the turn machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BattleStatus {
    /// Waiting for `side` to act.
    Turn(Side),
    /// No further actions resolve.
    Ended(BattleOutcome),
}

/// Something that happened while resolving a battle frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// `attacker` hit its opponent.
    Attack {
        attacker: Side,
        damage: u32,
        remaining_health: u32,
    },
    /// `side` ran out of health.
    Defeated { side: Side },
}

/// Persistent state of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    status: BattleStatus,
    selected_action: usize,
    exchanges: u32,
}

impl Battle {
    /// A fresh battle always opens on the player's turn with FIGHT selected.
    pub fn new() -> Self {
        Self {
            status: BattleStatus::Turn(Side::Player),
            selected_action: 0,
            exchanges: 0,
        }
    }

    /// Opens a battle between `player` and `enemy`.
    ///
    /// A side that is already out of health has lost before the first turn,
    /// so the battle opens as `Ended` and never resolves an action.
    pub fn between(player: &Character, enemy: &Character) -> Self {
        let mut battle = Self::new();
        if player.is_defeated() {
            battle.finish(BattleOutcome::Defeat);
        } else if enemy.is_defeated() {
            battle.finish(BattleOutcome::Victory);
        }
        battle
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    /// Side expected to act next, or `None` once the battle has ended.
    pub fn turn(&self) -> Option<Side> {
        match self.status {
            BattleStatus::Turn(side) => Some(side),
            BattleStatus::Ended(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.status {
            BattleStatus::Ended(outcome) => Some(outcome),
            BattleStatus::Turn(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Number of actions resolved so far.
    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    pub fn actions(&self) -> &'static [BattleAction] {
        &BattleAction::ALL
    }

    pub fn selected_index(&self) -> usize {
        self.selected_action
    }

    pub fn selected_action(&self) -> BattleAction {
        BattleAction::ALL[self.selected_action]
    }

    /// Highlights the action at `index`, wrapping past either end.
    pub fn select_action(&mut self, index: usize) {
        self.selected_action = index % BattleAction::ALL.len();
    }

    pub fn select_next(&mut self) {
        self.select_action(self.selected_action + 1);
    }

    pub fn select_previous(&mut self) {
        let len = BattleAction::ALL.len();
        self.select_action(self.selected_action + len - 1);
    }

    pub(crate) fn pass_turn(&mut self, actor: Side) {
        self.exchanges += 1;
        self.status = BattleStatus::Turn(actor.opponent());
    }

    pub(crate) fn finish(&mut self, outcome: BattleOutcome) {
        self.status = BattleStatus::Ended(outcome);
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-role behavior policies.
//!
//! Every character is the same [`Character`] record; what differs between the
//! player, the ally and the enemy is the [`Behavior`] attached to it when the
//! roster is spawned. Policies run once per exploration frame and are not
//! called while a battle is active.

mod ally;
mod patrol;
mod player;

pub use ally::PassiveAlly;
pub use patrol::{Patrol, PatrolPhase};
pub use player::PlayerControl;

use crate::config::GameConfig;
use crate::input::HeldKeys;
use crate::state::{Character, Rect, Role};

/// Read-only frame data a policy may consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorContext {
    /// Keys held this frame.
    pub held: HeldKeys,
    /// Region characters that respect bounds are clamped to.
    pub playfield: Rect,
}

impl BehaviorContext {
    pub fn new(held: HeldKeys, playfield: Rect) -> Self {
        Self { held, playfield }
    }
}

/// Per-frame update rule for one character.
pub trait Behavior: Send {
    /// Advance `character` by one frame.
    fn update(&mut self, character: &mut Character, ctx: &BehaviorContext);
}

impl<B: Behavior + ?Sized> Behavior for Box<B> {
    #[inline]
    fn update(&mut self, character: &mut Character, ctx: &BehaviorContext) {
        (**self).update(character, ctx)
    }
}

/// Builds the policy a character of `role` is driven by.
pub fn for_role(role: Role, config: &GameConfig) -> Box<dyn Behavior> {
    match role {
        Role::Player => Box::new(PlayerControl),
        Role::Ally => Box::new(PassiveAlly),
        Role::Enemy => Box::new(Patrol::new(config.patrol_phase_frames)),
    }
}

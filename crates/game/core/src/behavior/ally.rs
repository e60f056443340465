use super::{Behavior, BehaviorContext};
use crate::state::Character;

/// Companion that stays where it was spawned.
///
/// Autonomous movement for the ally is not part of this game yet, so the
/// policy deliberately leaves the character untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassiveAlly;

impl Behavior for PassiveAlly {
    fn update(&mut self, _character: &mut Character, _ctx: &BehaviorContext) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HeldKeys;
    use crate::state::{CharacterStats, Color, Rect, Role};

    #[test]
    fn ignores_input() {
        let mut character = Character::new(
            "Companion",
            Role::Ally,
            Rect::new(300, 300, 32, 32),
            CharacterStats::new(120, 20, 8),
            5,
            Color::PINK,
        );
        let before = character.clone();
        let ctx = BehaviorContext::new(
            HeldKeys::RIGHT | HeldKeys::DOWN,
            Rect::new(0, 0, 800, 600),
        );

        for _ in 0..10 {
            PassiveAlly.update(&mut character, &ctx);
        }

        assert_eq!(character, before);
    }
}

use super::{Behavior, BehaviorContext};
use crate::state::Character;

/// Moves the character with the held directional keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerControl;

impl Behavior for PlayerControl {
    fn update(&mut self, character: &mut Character, ctx: &BehaviorContext) {
        let (dx, dy) = ctx.held.axis();
        character.move_by(dx, dy);
        character.tick_cooldown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HeldKeys;
    use crate::state::{CharacterStats, Color, Position, Rect, Role};

    fn hero() -> Character {
        Character::new(
            "Hero",
            Role::Player,
            Rect::new(100, 300, 32, 32),
            CharacterStats::new(100, 15, 10),
            5,
            Color::BLUE,
        )
    }

    #[test]
    fn follows_held_keys_without_clamping() {
        let mut character = hero();
        let ctx = BehaviorContext::new(HeldKeys::LEFT | HeldKeys::UP, Rect::new(0, 0, 10, 10));

        PlayerControl.update(&mut character, &ctx);

        assert_eq!(character.position(), Position::new(95, 295));
    }

    #[test]
    fn counts_down_attack_cooldown() {
        let mut character = hero();
        character.begin_attack(3);
        let ctx = BehaviorContext::new(HeldKeys::empty(), Rect::new(0, 0, 800, 600));

        for _ in 0..3 {
            PlayerControl.update(&mut character, &ctx);
        }

        assert_eq!(character.attack_cooldown, 0);
        assert!(!character.is_attacking);
        assert_eq!(character.position(), Position::new(100, 300));
    }
}

//! The three characters alive during a play session.

use crate::behavior::{self, Behavior, BehaviorContext};
use crate::config::GameConfig;
use crate::input::HeldKeys;

use super::{Character, CharacterStats, Color, Rect, Role};

/// Spawn parameters for one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterTemplate {
    pub name: &'static str,
    pub role: Role,
    pub spawn: Rect,
    pub stats: CharacterStats,
    pub color: Color,
}

impl CharacterTemplate {
    pub const HERO: Self = Self {
        name: "Hero",
        role: Role::Player,
        spawn: Rect::new(100, 300, 32, 32),
        stats: CharacterStats::new(100, 15, 10),
        color: Color::BLUE,
    };

    pub const COMPANION: Self = Self {
        name: "Companion",
        role: Role::Ally,
        spawn: Rect::new(300, 300, 32, 32),
        stats: CharacterStats::new(120, 20, 8),
        color: Color::PINK,
    };

    pub const WARDEN: Self = Self {
        name: "Warden",
        role: Role::Enemy,
        spawn: Rect::new(500, 300, 40, 40),
        stats: CharacterStats::new(150, 25, 15),
        color: Color::BROWN,
    };

    pub fn spawn(&self, config: &GameConfig) -> Character {
        Character::new(
            self.name,
            self.role,
            self.spawn,
            self.stats,
            config.character_speed,
            self.color,
        )
    }
}

/// A character paired with the policy that drives it.
pub struct Actor {
    pub character: Character,
    behavior: Box<dyn Behavior>,
}

impl Actor {
    pub fn new(character: Character, behavior: Box<dyn Behavior>) -> Self {
        Self {
            character,
            behavior,
        }
    }

    pub fn from_template(template: &CharacterTemplate, config: &GameConfig) -> Self {
        Self::new(
            template.spawn(config),
            behavior::for_role(template.role, config),
        )
    }

    pub fn update(&mut self, ctx: &BehaviorContext) {
        self.behavior.update(&mut self.character, ctx);
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("character", &self.character)
            .finish_non_exhaustive()
    }
}

/// Player, ally and enemy of one play session.
#[derive(Debug)]
pub struct Roster {
    pub player: Actor,
    pub ally: Actor,
    pub enemy: Actor,
    playfield: Rect,
}

impl Roster {
    /// Spawns fresh characters at their starting positions.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            player: Actor::from_template(&CharacterTemplate::HERO, config),
            ally: Actor::from_template(&CharacterTemplate::COMPANION, config),
            enemy: Actor::from_template(&CharacterTemplate::WARDEN, config),
            playfield: config.playfield(),
        }
    }

    /// Runs every character's policy for one exploration frame.
    pub fn update(&mut self, held: HeldKeys) {
        let ctx = BehaviorContext::new(held, self.playfield);
        self.player.update(&ctx);
        self.ally.update(&ctx);
        self.enemy.update(&ctx);
    }

    /// Returns true when the player's and enemy's bounding boxes overlap.
    pub fn player_meets_enemy(&self) -> bool {
        self.player.character.intersects(&self.enemy.character)
    }

    pub fn combatants(&self) -> (&Character, &Character) {
        (&self.player.character, &self.enemy.character)
    }

    /// Borrows the two battle participants at once.
    pub fn combatants_mut(&mut self) -> (&mut Character, &mut Character) {
        (&mut self.player.character, &mut self.enemy.character)
    }

    pub fn characters(&self) -> [&Character; 3] {
        [
            &self.player.character,
            &self.ally.character,
            &self.enemy.character,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_three_roles_apart() {
        let roster = Roster::spawn(&GameConfig::default());
        let [player, ally, enemy] = roster.characters();

        assert_eq!(player.role, Role::Player);
        assert_eq!(ally.role, Role::Ally);
        assert_eq!(enemy.role, Role::Enemy);
        assert_eq!(enemy.health().maximum, 150);
        assert!(!roster.player_meets_enemy());
    }

    #[test]
    fn walking_right_reaches_the_patrolling_enemy() {
        let mut roster = Roster::spawn(&GameConfig::default());
        let mut frames = 0;

        while !roster.player_meets_enemy() {
            roster.update(HeldKeys::RIGHT);
            frames += 1;
            assert!(frames < 240, "player never met the enemy");
        }

        assert_eq!(
            roster.ally.character.position(),
            CharacterTemplate::COMPANION.spawn.position()
        );
    }
}

use arrayvec::ArrayVec;

use super::{Battle, BattleAction, BattleEvent, BattleOutcome, BattleStatus, Side};
use crate::config::GameConfig;
use crate::state::Character;

/// Events produced by a single battle frame (an attack and possibly a defeat).
pub type BattleEvents = ArrayVec<BattleEvent, 2>;

/// Resolves one frame of a [`Battle`] over borrowed combatants.
///
/// The engine is created per frame and dropped right after, so the characters
/// stay owned by the roster.
pub struct BattleEngine<'a> {
    battle: &'a mut Battle,
    player: &'a mut Character,
    enemy: &'a mut Character,
    attack_cooldown: u32,
}

impl<'a> BattleEngine<'a> {
    pub fn new(
        battle: &'a mut Battle,
        player: &'a mut Character,
        enemy: &'a mut Character,
        config: &GameConfig,
    ) -> Self {
        Self {
            battle,
            player,
            enemy,
            attack_cooldown: config.attack_cooldown_frames,
        }
    }

    /// Advances the battle by one frame.
    ///
    /// `confirm` is whether the confirm key is held this frame. At most one
    /// side acts per call.
    pub fn update(&mut self, confirm: bool) -> BattleEvents {
        let mut events = BattleEvents::new();

        self.player.tick_cooldown();
        self.enemy.tick_cooldown();

        if self.battle.is_over() {
            return events;
        }
        if let Some(side) = self.fallen() {
            self.battle.finish(BattleOutcome::for_defeated(side));
            return events;
        }

        let actor = match self.battle.status() {
            BattleStatus::Ended(_) => return events,
            BattleStatus::Turn(Side::Player) if self.player_can_fight(confirm) => Side::Player,
            BattleStatus::Turn(Side::Enemy) if !self.enemy.is_attacking => Side::Enemy,
            BattleStatus::Turn(_) => return events,
        };

        let cooldown = self.attack_cooldown;
        let (attacker, defender) = self.pair_mut(actor);
        let damage = defender.take_damage(attacker.attack);
        attacker.begin_attack(cooldown);
        let remaining_health = defender.health().current;
        let defeated = defender.is_defeated();

        events.push(BattleEvent::Attack {
            attacker: actor,
            damage,
            remaining_health,
        });
        self.battle.pass_turn(actor);

        if defeated {
            let side = actor.opponent();
            events.push(BattleEvent::Defeated { side });
            self.battle.finish(BattleOutcome::for_defeated(side));
        }

        events
    }

    /// A participant already out of health before this frame acted.
    fn fallen(&self) -> Option<Side> {
        if self.player.is_defeated() {
            Some(Side::Player)
        } else if self.enemy.is_defeated() {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    fn player_can_fight(&self, confirm: bool) -> bool {
        confirm && !self.player.is_attacking && self.battle.selected_action() == BattleAction::Fight
    }

    fn pair_mut(&mut self, attacker: Side) -> (&mut Character, &mut Character) {
        match attacker {
            Side::Player => (&mut *self.player, &mut *self.enemy),
            Side::Enemy => (&mut *self.enemy, &mut *self.player),
        }
    }
}

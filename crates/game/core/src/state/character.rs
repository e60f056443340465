use crate::combat;

use super::{Color, Position, Rect, Velocity};

/// Which slot of the party a character fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Moved by directional input.
    Player,
    /// Follows the player around; no autonomous movement yet.
    Ally,
    /// Patrols the playfield and fights the player on contact.
    Enemy,
}

/// Integer resource meter (health) with a fixed maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Fraction of the meter that is filled, in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// Combat attributes a character is created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterStats {
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CharacterStats {
    pub const fn new(max_health: u32, attack: u32, defense: u32) -> Self {
        Self {
            max_health,
            attack,
            defense,
        }
    }
}

/// A participant in exploration and battle.
///
/// Health always satisfies `0 <= current <= maximum`; every mutation goes
/// through [`take_damage`](Self::take_damage) or [`heal`](Self::heal).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub name: &'static str,
    pub role: Role,
    pub bounds: Rect,
    pub velocity: Velocity,
    health: ResourceMeter,
    pub attack: u32,
    pub defense: u32,
    pub is_attacking: bool,
    pub attack_cooldown: u32,
    pub speed: i32,
    pub color: Color,
}

impl Character {
    pub fn new(
        name: &'static str,
        role: Role,
        bounds: Rect,
        stats: CharacterStats,
        speed: i32,
        color: Color,
    ) -> Self {
        Self {
            name,
            role,
            bounds,
            velocity: Velocity::ZERO,
            health: ResourceMeter::full(stats.max_health),
            attack: stats.attack,
            defense: stats.defense,
            is_attacking: false,
            attack_cooldown: 0,
            speed,
            color,
        }
    }

    pub fn position(&self) -> Position {
        self.bounds.position()
    }

    pub fn health(&self) -> ResourceMeter {
        self.health
    }

    /// Displaces the character by `(dx * speed, dy * speed)`.
    ///
    /// Each axis is expected in `{-1, 0, 1}`. No clamping happens here.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let velocity = Velocity::new(dx * self.speed, dy * self.speed);
        self.bounds.x += velocity.dx;
        self.bounds.y += velocity.dy;
        self.velocity = velocity;
    }

    /// Applies an incoming attack and returns the damage actually dealt.
    pub fn take_damage(&mut self, attack: u32) -> u32 {
        let damage = combat::calculate_damage(attack, self.defense);
        self.health.current = combat::apply_damage(self.health.current, damage);
        damage
    }

    /// Restores health up to the maximum and returns the new value.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.current =
            combat::apply_healing(self.health.current, self.health.maximum, amount);
        self.health.current
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }

    /// Marks the character as mid-attack for `cooldown` frames.
    pub fn begin_attack(&mut self, cooldown: u32) {
        self.is_attacking = true;
        self.attack_cooldown = cooldown;
    }

    /// Advances the attack cooldown by one frame.
    ///
    /// The attacking flag clears on the frame the countdown reaches zero.
    pub fn tick_cooldown(&mut self) {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }
        if self.attack_cooldown == 0 {
            self.is_attacking = false;
        }
    }

    pub fn intersects(&self, other: &Character) -> bool {
        self.bounds.intersects(&other.bounds)
    }
}

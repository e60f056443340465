//! Damage and healing arithmetic.

/// Smallest amount of damage a landed attack can deal.
pub const MINIMUM_DAMAGE: u32 = 1;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// final_damage = max(MINIMUM_DAMAGE, attack - defense)
/// ```
///
/// Defense never absorbs an attack completely.
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(MINIMUM_DAMAGE)
}

/// Apply damage to current health.
///
/// Returns the new health value (clamped to 0).
pub fn apply_damage(current: u32, damage: u32) -> u32 {
    current.saturating_sub(damage)
}

/// Apply healing to current health.
///
/// Returns the new health value (clamped to `maximum`).
pub fn apply_healing(current: u32, maximum: u32, amount: u32) -> u32 {
    current.saturating_add(amount).min(maximum)
}

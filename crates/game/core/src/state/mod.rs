//! Data model for everything that lives on the playfield.

mod character;
mod common;
mod roster;

pub use character::{Character, CharacterStats, ResourceMeter, Role};
pub use common::{Color, Position, Rect, Velocity};
pub use roster::{Actor, CharacterTemplate, Roster};

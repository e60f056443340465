//! Combat arithmetic.
//!
//! Pure functions shared by [`Character`](crate::state::Character) and the
//! battle resolver. Amounts are unsigned, so negative damage or healing cannot
//! reach these functions.

pub mod damage;

pub use damage::{MINIMUM_DAMAGE, apply_damage, apply_healing, calculate_damage};

use crate::state::Rect;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the playfield in world units.
    pub playfield_width: i32,
    /// Height of the playfield in world units.
    pub playfield_height: i32,
    /// Frames a participant stays marked as attacking after resolving an action.
    pub attack_cooldown_frames: u32,
    /// Frames the patrolling enemy holds each movement phase.
    pub patrol_phase_frames: u32,
    /// Units every character moves per frame along each axis.
    pub character_speed: i32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of items a single menu can hold.
    pub const MAX_MENU_ITEMS: usize = 8;
    /// Number of actions offered in the battle panel.
    pub const BATTLE_ACTIONS: usize = 4;
    /// Number of movement phases in the patrol cycle.
    pub const PATROL_PHASES: u8 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYFIELD_WIDTH: i32 = 800;
    pub const DEFAULT_PLAYFIELD_HEIGHT: i32 = 600;
    pub const DEFAULT_ATTACK_COOLDOWN: u32 = 30;
    pub const DEFAULT_PATROL_PHASE_FRAMES: u32 = 60;
    pub const DEFAULT_CHARACTER_SPEED: i32 = 5;

    pub fn new() -> Self {
        Self {
            playfield_width: Self::DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: Self::DEFAULT_PLAYFIELD_HEIGHT,
            attack_cooldown_frames: Self::DEFAULT_ATTACK_COOLDOWN,
            patrol_phase_frames: Self::DEFAULT_PATROL_PHASE_FRAMES,
            character_speed: Self::DEFAULT_CHARACTER_SPEED,
        }
    }

    pub fn with_playfield(width: i32, height: i32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::new()
        }
    }

    /// Bounds that clamp characters which are not allowed to leave the screen.
    pub fn playfield(&self) -> Rect {
        Rect::new(0, 0, self.playfield_width, self.playfield_height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

use super::{Behavior, BehaviorContext};
use crate::state::Character;

/// One leg of the patrol cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum PatrolPhase {
    Right,
    Left,
    Down,
    Up,
}

impl PatrolPhase {
    /// Position of this phase in the cycle (`0..4`).
    pub const fn index(self) -> u8 {
        match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Down => 2,
            Self::Up => 3,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Up,
            Self::Up => Self::Right,
        }
    }

    const fn direction(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Up => (0, -1),
        }
    }
}

/// Walks a fixed right, left, down, up loop and never leaves the playfield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patrol {
    phase: PatrolPhase,
    phase_timer: u32,
    phase_frames: u32,
}

impl Patrol {
    pub fn new(phase_frames: u32) -> Self {
        Self {
            phase: PatrolPhase::Right,
            phase_timer: 0,
            phase_frames: phase_frames.max(1),
        }
    }

    pub fn phase(&self) -> PatrolPhase {
        self.phase
    }

    /// Frames already spent in the current phase.
    pub fn phase_timer(&self) -> u32 {
        self.phase_timer
    }
}

impl Behavior for Patrol {
    fn update(&mut self, character: &mut Character, ctx: &BehaviorContext) {
        let (dx, dy) = self.phase.direction();
        character.move_by(dx, dy);
        character.bounds.clamp_within(&ctx.playfield);

        self.phase_timer += 1;
        if self.phase_timer >= self.phase_frames {
            self.phase = self.phase.next();
            self.phase_timer = 0;
        }
    }
}

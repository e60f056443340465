//! Input polling interface.

use std::collections::VecDeque;

use game_core::{HeldKeys, InputEvent};

use crate::Result;

/// Everything the host reported for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Discrete key presses and requests, in arrival order.
    pub events: Vec<InputEvent>,
    /// Movement and confirm keys held during this frame.
    pub held: HeldKeys,
}

impl InputFrame {
    pub fn new(events: Vec<InputEvent>, held: HeldKeys) -> Self {
        Self { events, held }
    }

    pub fn pressed(event: InputEvent) -> Self {
        Self::new(vec![event], HeldKeys::empty())
    }

    pub fn held(held: HeldKeys) -> Self {
        Self::new(Vec::new(), held)
    }
}

/// Source of per-frame input, drained once at the start of every frame.
pub trait InputSource {
    fn poll(&mut self) -> Result<InputFrame>;
}

/// Replays a fixed sequence of frames, then reports a quit request.
///
/// Used for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputFrame> {
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| InputFrame::pressed(InputEvent::Quit)))
    }
}

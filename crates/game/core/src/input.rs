//! Host-independent input vocabulary.
//!
//! Hosts translate their own key codes into these types; key bindings are a
//! frontend configuration concern.

use bitflags::bitflags;

/// Discrete input event drained from the host once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    ToggleBattle,
    /// Host asked the application to close (window closed, interrupt).
    Quit,
}

bitflags! {
    /// Keys held down during the current frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const CONFIRM = 1 << 4;
    }
}

impl HeldKeys {
    /// Resolves opposed key pairs into a movement direction.
    ///
    /// Each component is `right - left` and `down - up`, so it is always in
    /// `{-1, 0, 1}`.
    pub fn axis(self) -> (i32, i32) {
        let dx = i32::from(self.contains(Self::RIGHT)) - i32::from(self.contains(Self::LEFT));
        let dy = i32::from(self.contains(Self::DOWN)) - i32::from(self.contains(Self::UP));
        (dx, dy)
    }

    pub fn confirm(self) -> bool {
        self.contains(Self::CONFIRM)
    }
}

//! Keyboard input for the terminal client.
//!
//! This module owns the keyboard-to-input mapping so the runtime stays
//! agnostic about concrete key bindings or the specifics of `crossterm`
//! events.
//!
//! Terminals report presses, not key state. A key therefore counts as held for
//! a few frames after each press or repeat, or until its release when the
//! terminal supports release reporting.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{HeldKeys, InputEvent};
use runtime::{InputFrame, InputSource, RuntimeError};
use tracing::warn;

/// What a single key stands for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyBinding {
    pub event: Option<InputEvent>,
    pub held: HeldKeys,
}

impl KeyBinding {
    const NONE: Self = Self {
        event: None,
        held: HeldKeys::empty(),
    };

    const fn pressed(event: InputEvent) -> Self {
        Self {
            event: Some(event),
            held: HeldKeys::empty(),
        }
    }

    const fn with_held(event: InputEvent, held: HeldKeys) -> Self {
        Self {
            event: Some(event),
            held,
        }
    }
}

/// Default key map.
///
/// Arrows and WASD move and navigate, Enter and Space confirm, Escape
/// cancels, `b` toggles battle and Ctrl+C closes the game.
pub fn binding_for(key: &KeyEvent) -> KeyBinding {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyBinding::pressed(InputEvent::Quit),
            _ => KeyBinding::NONE,
        };
    }

    match key.code {
        KeyCode::Up => KeyBinding::with_held(InputEvent::Up, HeldKeys::UP),
        KeyCode::Down => KeyBinding::with_held(InputEvent::Down, HeldKeys::DOWN),
        KeyCode::Left => KeyBinding::with_held(InputEvent::Left, HeldKeys::LEFT),
        KeyCode::Right => KeyBinding::with_held(InputEvent::Right, HeldKeys::RIGHT),
        KeyCode::Enter => KeyBinding::with_held(InputEvent::Confirm, HeldKeys::CONFIRM),
        KeyCode::Esc => KeyBinding::pressed(InputEvent::Cancel),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'w' => KeyBinding::with_held(InputEvent::Up, HeldKeys::UP),
            's' => KeyBinding::with_held(InputEvent::Down, HeldKeys::DOWN),
            'a' => KeyBinding::with_held(InputEvent::Left, HeldKeys::LEFT),
            'd' => KeyBinding::with_held(InputEvent::Right, HeldKeys::RIGHT),
            ' ' => KeyBinding::with_held(InputEvent::Confirm, HeldKeys::CONFIRM),
            'b' => KeyBinding::pressed(InputEvent::ToggleBattle),
            _ => KeyBinding::NONE,
        },
        _ => KeyBinding::NONE,
    }
}

/// Per-key hold timers fed by press, repeat and release reports.
#[derive(Clone, Debug)]
pub struct HeldTracker {
    hold_frames: u8,
    releases_reported: bool,
    remaining: [u8; 5],
}

impl HeldTracker {
    const KEYS: [HeldKeys; 5] = [
        HeldKeys::UP,
        HeldKeys::DOWN,
        HeldKeys::LEFT,
        HeldKeys::RIGHT,
        HeldKeys::CONFIRM,
    ];

    /// With `releases_reported`, a key stays held until its release arrives.
    pub fn new(hold_frames: u8, releases_reported: bool) -> Self {
        Self {
            hold_frames: hold_frames.max(1),
            releases_reported,
            remaining: [0; 5],
        }
    }

    pub fn press(&mut self, keys: HeldKeys) {
        let frames = if self.releases_reported {
            u8::MAX
        } else {
            self.hold_frames
        };
        self.update(keys, frames);
    }

    pub fn release(&mut self, keys: HeldKeys) {
        self.update(keys, 0);
    }

    /// Keys held for the frame being built, then ages every timer by a frame.
    pub fn next_frame(&mut self) -> HeldKeys {
        let mut held = HeldKeys::empty();
        for (key, remaining) in Self::KEYS.iter().zip(self.remaining.iter_mut()) {
            if *remaining > 0 {
                held |= *key;
                if *remaining != u8::MAX {
                    *remaining -= 1;
                }
            }
        }
        held
    }

    fn update(&mut self, keys: HeldKeys, frames: u8) {
        for (key, remaining) in Self::KEYS.iter().zip(self.remaining.iter_mut()) {
            if keys.contains(*key) {
                *remaining = frames;
            }
        }
    }
}

/// Drains the crossterm event queue once per frame.
pub struct CrosstermInput {
    held: HeldTracker,
}

impl CrosstermInput {
    pub fn new(hold_frames: u8, releases_reported: bool) -> Self {
        Self {
            held: HeldTracker::new(hold_frames, releases_reported),
        }
    }

    /// Folds one terminal event into `events` and the hold timers.
    fn apply(&mut self, event: Event, events: &mut Vec<InputEvent>) {
        let Event::Key(key) = event else {
            return;
        };
        let binding = binding_for(&key);

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                events.extend(binding.event);
                self.held.press(binding.held);
            }
            KeyEventKind::Release => self.held.release(binding.held),
        }
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> runtime::Result<InputFrame> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).map_err(RuntimeError::input)? {
            let event = event::read().map_err(RuntimeError::input)?;
            self.apply(event, &mut events);
        }

        if events.len() > 16 {
            warn!(count = events.len(), "large input backlog in one frame");
        }

        Ok(InputFrame::new(events, self.held.next_frame()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyModifiers::empty(), KeyEventKind::Press)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        assert_eq!(
            binding_for(&key(KeyCode::Char('W'))),
            KeyBinding::with_held(InputEvent::Up, HeldKeys::UP)
        );
        assert_eq!(
            binding_for(&key(KeyCode::Left)),
            KeyBinding::with_held(InputEvent::Left, HeldKeys::LEFT)
        );
    }

    #[test]
    fn maps_confirm_cancel_and_battle() {
        assert_eq!(binding_for(&key(KeyCode::Char(' '))).held, HeldKeys::CONFIRM);
        assert_eq!(
            binding_for(&key(KeyCode::Enter)).event,
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            binding_for(&key(KeyCode::Esc)).event,
            Some(InputEvent::Cancel)
        );
        assert_eq!(
            binding_for(&key(KeyCode::Char('b'))).event,
            Some(InputEvent::ToggleBattle)
        );
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let binding = binding_for(&key_with(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));
        assert_eq!(binding.event, Some(InputEvent::Quit));
    }

    #[test]
    fn ignores_unknown_keys() {
        assert_eq!(binding_for(&key(KeyCode::Char('x'))), KeyBinding::NONE);
        assert_eq!(binding_for(&key(KeyCode::Tab)), KeyBinding::NONE);
    }

    #[test]
    fn presses_decay_without_release_reports() {
        let mut tracker = HeldTracker::new(2, false);
        tracker.press(HeldKeys::RIGHT);

        assert_eq!(tracker.next_frame(), HeldKeys::RIGHT);
        assert_eq!(tracker.next_frame(), HeldKeys::RIGHT);
        assert_eq!(tracker.next_frame(), HeldKeys::empty());
    }

    #[test]
    fn reported_releases_end_the_hold() {
        let mut tracker = HeldTracker::new(2, true);
        tracker.press(HeldKeys::UP | HeldKeys::CONFIRM);
        for _ in 0..10 {
            assert_eq!(tracker.next_frame(), HeldKeys::UP | HeldKeys::CONFIRM);
        }

        tracker.release(HeldKeys::UP);
        assert_eq!(tracker.next_frame(), HeldKeys::CONFIRM);
    }

    #[test]
    fn release_events_do_not_produce_input_events() {
        let mut input = CrosstermInput::new(4, true);
        let mut events = Vec::new();

        input.apply(
            Event::Key(key_with(KeyCode::Down, KeyModifiers::empty(), KeyEventKind::Press)),
            &mut events,
        );
        input.apply(
            Event::Key(key_with(KeyCode::Down, KeyModifiers::empty(), KeyEventKind::Release)),
            &mut events,
        );

        assert_eq!(events, [InputEvent::Down]);
        assert_eq!(input.held.next_frame(), HeldKeys::empty());
    }
}

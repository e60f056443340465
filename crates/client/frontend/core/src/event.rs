//! Utilities for reacting to runtime events inside UI layers.
use runtime::GameEvent;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    /// Reacts to one event emitted on `frame`.
    fn on_event(&mut self, event: &GameEvent, frame: u64) -> EventImpact;

    /// Feeds every event of a frame through [`on_event`](Self::on_event).
    fn on_events(&mut self, events: &[GameEvent], frame: u64) -> EventImpact {
        events.iter().fold(EventImpact::none(), |impact, event| {
            impact.combine(self.on_event(event, frame))
        })
    }

    fn message_log(&self) -> &MessageLog;
}

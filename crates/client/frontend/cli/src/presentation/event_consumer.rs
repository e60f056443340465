//! Maintains the CLI message log in response to runtime events.
use client_frontend_core::{
    config::MessageVisibility,
    event::{EventConsumer, EventImpact},
    format::format_event,
    message::{MessageEntry, MessageLog},
};
use runtime::GameEvent;

pub struct CliEventConsumer {
    log: MessageLog,
    visibility: MessageVisibility,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, visibility: MessageVisibility) -> Self {
        Self { log, visibility }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &GameEvent, frame: u64) -> EventImpact {
        if !self.visibility.should_show(event) {
            return EventImpact::none();
        }
        let Some((text, level)) = format_event(event) else {
            return EventImpact::none();
        };

        self.log.push(MessageEntry::new(text, Some(frame), level));
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }
}

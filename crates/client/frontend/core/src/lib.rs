//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event formatting and the frontend abstraction that
//! the terminal client and any future graphical client share.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;

pub use config::{FrontendConfig, MessageConfig, MessageVisibility};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};

//! Application controller and frame loop.
//!
//! This crate composes the pure rules from `game-core` into a runnable game:
//! the top-level state machine, the events it reports, the drawing and input
//! interfaces hosts implement, and the fixed-step loop that ties them together.
//!
//! Modules are organized by responsibility:
//! - [`app`] hosts the state machine over menu, settings, credits and play
//! - [`events`] describes what happened during a frame
//! - [`input`] and [`render`] are the host-facing seams
//! - [`runtime`] paces frames and hands finished scenes to a presenter
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod render;
pub mod runtime;

pub use app::{Application, Session};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{AppMode, BattleTrigger, GameEvent};
pub use input::{InputFrame, InputSource, ScriptedInput};
pub use render::{Anchor, DrawCommand, RenderSurface, Scene};
pub use runtime::{FrameClock, Presenter, RenderedFrame, Runtime, RuntimeContext};

//! Terminal UI frontend for Dark World.
//!
//! This crate supplies the host side of the frame loop for a terminal:
//! - [`input`] turns crossterm key events into game input
//! - [`presentation`] paints recorded scenes and the message log with ratatui
//! - [`CliFrontend`] wires both into a [`runtime::Runtime`]

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, LoggingConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;

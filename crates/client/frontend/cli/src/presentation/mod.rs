//! Terminal rendering: layout, widgets, styling and terminal lifecycle.
pub mod event_consumer;
pub mod presenter;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use presenter::CliPresenter;

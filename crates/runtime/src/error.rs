//! Error type surfaced by the runtime API.
//!
//! Host adapters (input sources, presenters) box their own failures into the
//! matching variant so the binary can report them with context.
use std::error::Error as StdError;

use game_core::MenuError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read input from the host")]
    Input(#[source] BoxError),

    #[error("failed to present a frame")]
    Presentation(#[source] BoxError),

    #[error("failed to build a menu")]
    Menu(#[from] MenuError),

    #[error("frame rate must be positive")]
    InvalidFrameRate,
}

impl RuntimeError {
    pub fn input(source: impl Into<BoxError>) -> Self {
        Self::Input(source.into())
    }

    pub fn presentation(source: impl Into<BoxError>) -> Self {
        Self::Presentation(source.into())
    }
}

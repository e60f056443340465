//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeConfig;

/// Frontend abstraction for UI layers.
///
/// A frontend supplies the host side of the frame loop: an
/// [`InputSource`](runtime::InputSource) that reads the keyboard and a
/// [`Presenter`](runtime::Presenter) that shows recorded scenes. It builds a
/// [`Runtime`](runtime::Runtime) from both and drives it until the player quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::{InputFrame, Presenter, RenderedFrame, Runtime, RuntimeConfig, ScriptedInput};
///
/// struct Silent;
///
/// impl Presenter for Silent {
///     fn present(&mut self, _frame: RenderedFrame<'_>) -> runtime::Result<()> {
///         Ok(())
///     }
/// }
///
/// struct Headless;
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, config: RuntimeConfig) -> Result<()> {
///         let input = ScriptedInput::new([InputFrame::default()]);
///         Runtime::new(config, input, Silent)?.run().await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, config: RuntimeConfig) -> Result<()>;
}

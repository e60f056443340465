//! Glue code tying the frame loop and the terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{Frontend, FrontendConfig, MessageLog};
use runtime::{Runtime, RuntimeConfig};

use crate::config::CliConfig;
use crate::input::CrosstermInput;
use crate::presentation::{CliPresenter, event_consumer::CliEventConsumer, terminal};

/// Terminal frontend: crossterm keyboard in, ratatui frames out.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, config: RuntimeConfig) -> Result<()> {
        let messages = &self.frontend_config.messages;
        let consumer = CliEventConsumer::new(
            MessageLog::new(messages.capacity),
            messages.visibility.clone(),
        );
        let world = config.game.playfield();

        let (tui, releases_reported) = terminal::init().context("failed to set up terminal")?;
        let _guard = terminal::TerminalGuard;
        tracing::info!(releases_reported, "terminal initialized");

        let ui = &self.cli_config.ui;
        let input = CrosstermInput::new(ui.key_hold_frames, releases_reported);
        let presenter = CliPresenter::new(tui, consumer, world, ui.message_panel_height);

        let mut runtime = Runtime::new(config, input, presenter)?;
        runtime.run().await.context("frame loop failed")?;

        tracing::info!(
            frames = runtime.context().clock.frames(),
            messages = runtime.presenter().messages().len(),
            "CLI client exiting"
        );
        Ok(())
    }
}

//! Top-level client pairing a frontend with the frame loop configuration.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ RuntimeConfig (frame rate, playfield, initial settings)
//!   └─→ Frontend (builds input and presenter, drives the Runtime)
//! ```

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::RuntimeConfig;

/// Top-level client container.
pub struct Client {
    config: RuntimeConfig,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Transfers control to the frontend until the player quits.
    pub async fn run(self) -> Result<()> {
        tracing::info!(
            fps = self.config.frames_per_second,
            difficulty = %self.config.settings.difficulty,
            "client starting"
        );

        let mut frontend = self.frontend;
        let result = frontend.run(self.config).await;

        match &result {
            Ok(()) => tracing::info!("client shutdown complete"),
            Err(error) => tracing::error!(%error, "frontend exited with an error"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use game_core::InputEvent;
    use runtime::{InputFrame, Presenter, RenderedFrame, Runtime, ScriptedInput};

    struct Counting {
        frames: u64,
    }

    impl Presenter for Counting {
        fn present(&mut self, _frame: RenderedFrame<'_>) -> runtime::Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    /// Idles one frame on the main menu, then cancels out of it.
    struct Headless;

    #[async_trait]
    impl Frontend for Headless {
        async fn run(&mut self, config: RuntimeConfig) -> Result<()> {
            let input = ScriptedInput::new([
                InputFrame::default(),
                InputFrame::pressed(InputEvent::Cancel),
            ]);
            let mut runtime = Runtime::new(config, input, Counting { frames: 0 })?;
            runtime.run().await?;
            anyhow::ensure!(runtime.presenter().frames == 2, "unexpected frame count");
            Ok(())
        }
    }

    #[test]
    fn build_requires_a_frontend() {
        assert!(Client::builder().build().is_err());
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let client = Client::builder().frontend(Headless).build().unwrap();
        assert_eq!(client.config().frames_per_second, 60);
    }

    #[tokio::test]
    async fn run_hands_control_to_the_frontend() {
        let client = Client::builder().frontend(Headless).build().unwrap();
        client.run().await.unwrap();
    }
}

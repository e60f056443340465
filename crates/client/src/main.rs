//! Dark World game client binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! installs file logging, and hands control to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! GAME_DIFFICULTY=hard GAME_FPS=30 cargo run -p darkworld-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use darkworld_client::Client;
    use runtime::RuntimeConfig;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_dir = logging::setup_logging(&cli_config.logging)?;
    tracing::info!(log_dir = %log_dir.display(), "starting Dark World client");

    // 3. Build Frontend and Client
    let frontend = CliFrontend::new(frontend_config, cli_config);
    let client = Client::builder()
        .config(runtime_config)
        .frontend(frontend)
        .build()?;

    client.run().await.context("client failed")
}

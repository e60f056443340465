//! File-only tracing setup.
//!
//! The terminal belongs to the UI while the game runs, so logs go to
//! `<log dir>/<session id>/client.log` and nowhere else.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber and returns the session log directory.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn setup_logging(config: &LoggingConfig) -> Result<PathBuf> {
    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);
    let session_log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(default_log_dir)
        .join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Leaked so the file writer lives for the whole process.
    std::mem::forget(guard);

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(session_log_dir)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Platform cache directory, or the temp dir when no home is known.
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "darkworld")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("darkworld").join("logs"))
}

use std::path::Path;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::errors::{Error, Result};

pub const LOG_FILE_PREFIX: &str = "hydration-tracker.log";

fn default_filter() -> EnvFilter {
    if cfg!(debug_assertions) {
        EnvFilter::new("info,hydration_tracker=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Logs to stdout and to a daily rolling file in `log_dir`.
///
/// `RUST_LOG` overrides the default filter. Keep the returned guard alive for
/// as long as logs should be flushed to the file.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        Error::Config(format!("unable to create {}: {e}", log_dir.display()))
    })?;

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .with_target(true)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))?;

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}

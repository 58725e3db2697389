//! Application logging functionality
//!
//! Sets up tracing output to stderr and, when asked, to a dated log file
//! under ~/.config/layersync/logs/

use crate::core::config_file::ConfigFile;
use crate::core::errors::LayerSyncResult;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name of today's log
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("layersync-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> LayerSyncResult<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level`. The returned guard flushes the log file
/// and must be kept alive until the program exits.
pub fn init_logging(level: &str, log_to_file: bool) -> LayerSyncResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if !log_to_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()?;
        return Ok(None);
    }

    initialize_logs_directory()?;
    let appender = tracing_appender::rolling::never(logs_dir(), current_log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    tracing::info!(
        "=== layersync started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    tracing::debug!("Logging to {:?}", current_log_file());
    Ok(Some(guard))
}

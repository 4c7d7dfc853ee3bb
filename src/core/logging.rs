//! File-backed structured logging.
//!
//! The terminal is owned by the UI, so every event goes to a daily rolling
//! JSON log file instead of stdout. `log` macros (used by config loading)
//! are bridged into `tracing` by the subscriber.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogConfig;

/// Log file name prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "character-explorer";

/// Resolved log directory (override or `<data_dir>/character-explorer/logs`).
pub fn log_dir(config: &LogConfig) -> PathBuf {
    config.dir.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .map(|d| d.join("character-explorer").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    })
}

/// Filter from `RUST_LOG`, falling back to the configured level.
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Returns the appender guard, which must stay alive for buffered lines to
/// be flushed. Returns `None` when logging could not be set up; the app
/// still runs, just without a log file.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let dir = log_dir(config);
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Failed to create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(config.retain_files)
        .build(&dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to open log file in {}: {e}", dir.display());
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter(config));

    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to initialize logging: {e}");
        return None;
    }

    tracing::info!(dir = %dir.display(), level = %config.level, "logging initialized");
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_override() {
        let config = LogConfig {
            dir: Some(PathBuf::from("/tmp/explorer-logs")),
            ..LogConfig::default()
        };
        assert_eq!(log_dir(&config), PathBuf::from("/tmp/explorer-logs"));
    }

    #[test]
    fn test_log_dir_default() {
        let dir = log_dir(&LogConfig::default());
        assert!(dir.ends_with("logs"));
    }
}

//! Tracing setup: stderr plus an optional log file.
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "monopoly.log";

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. When `log_dir`
/// resolves, every line is also written to `monopoly.log` there; keep the
/// returned guard alive until exit so the file writer flushes.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}", dir.join(LOG_FILE).display());
    }
    Ok(guard)
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/monopoly/logs`
/// - Linux: `~/.cache/monopoly/logs` (or `$XDG_CACHE_HOME/monopoly/logs`)
/// - Windows: `%LOCALAPPDATA%\monopoly\cache\logs`
pub fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "monopoly").map(|dirs| dirs.cache_dir().join("logs"))
}

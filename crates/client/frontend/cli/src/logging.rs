//! File logging for the terminal viewer.
//!
//! The TUI owns the terminal, so logs go to a per-session file only.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "map-viewer.log";

/// Keeps the background log writer alive. Drop it last.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    /// Path of the session log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Platform log directory of the viewer.
///
/// - macOS: `~/Library/Caches/map-viewer/logs`
/// - Linux: `~/.cache/map-viewer/logs` (or `$XDG_CACHE_HOME/map-viewer/logs`)
/// - Windows: `%LOCALAPPDATA%\map-viewer\cache\logs`
/// - Fallback: `/tmp/map-viewer/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "map-viewer")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/map-viewer"))
        .join("logs")
}

/// Session directory name derived from the current time.
pub fn session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Installs the global subscriber writing to `<log_dir>/<session>/map-viewer.log`.
///
/// `RUST_LOG` selects what is recorded; `info` and above is always on.
pub fn init(log_dir: Option<&Path>) -> Result<LoggingGuard> {
    let base = log_dir.map_or_else(default_log_dir, Path::to_path_buf);
    let session = session_id();
    let session_dir = base.join(&session);
    std::fs::create_dir_all(&session_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_dir.display()
        )
    })?;

    let appender = tracing_appender::rolling::never(&session_dir, LOG_FILE);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let path = session_dir.join(LOG_FILE);
    tracing::info!(%session, log = %path.display(), "logging initialized");

    Ok(LoggingGuard {
        _worker: worker,
        path,
    })
}

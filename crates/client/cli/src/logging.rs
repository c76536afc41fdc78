//! Logging to stderr plus an optional per-session file.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use maze_runtime::RuntimeConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop, so it must live until
/// the end of `main`. When the log directory cannot be created the file layer
/// is skipped and only stderr receives events.
pub fn setup(config: &RuntimeConfig) -> Result<Option<WorkerGuard>> {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = config.log_dir.clone().unwrap_or_else(log_dir).join(&session_id);
    let file_error = std::fs::create_dir_all(&session_log_dir).err();

    let (file_layer, guard) = match file_error {
        None => {
            let appender = tracing_appender::rolling::never(&session_log_dir, "maze.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Some(_) => (None, None),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    match file_error {
        None => tracing::info!(
            session = %session_id,
            "Log file: {}",
            session_log_dir.join("maze.log").display()
        ),
        Some(error) => tracing::warn!(
            "Log directory {} unavailable ({error}); logging to stderr only",
            session_log_dir.display()
        ),
    }

    Ok(guard)
}

/// Platform cache directory for logs, e.g. `~/.cache/maze/logs` on Linux.
fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "maze")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("maze"))
        .join("logs")
}

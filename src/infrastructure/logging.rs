use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE_NAME: &str = "steps.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: InitError,
    },
}

/// Installs the global subscriber writing to `<log_dir>/steps.log`.
///
/// The filter comes from `RUST_LOG`, falling back to `info`. The returned
/// guard flushes pending lines on drop and must outlive the event loop.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard, LoggingError> {
    let appender = file_appender(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be set (e.g. by a test harness); keep it.
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
    {
        tracing::debug!(error = %err, "global subscriber already installed, keeping it");
    }

    Ok(guard)
}

fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|source| LoggingError::OpenFile {
            path: log_dir.join(LOG_FILE_NAME),
            source,
        })
}

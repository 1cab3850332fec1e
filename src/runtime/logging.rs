use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingSettings};

pub const LOG_FILE: &str = "cubeplayer.log";
pub const FILTER_ENV: &str = "CUBEPLAYER_LOG";

/// Directory the log file is written to.
pub fn log_dir(settings: &LoggingSettings) -> Option<PathBuf> {
    settings.dir.clone().or_else(config::config_dir)
}

fn filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route `tracing` output to a file. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
///
/// Best-effort: returns `None` and logs nothing when the directory cannot be
/// created. Keep the guard alive until exit so buffered lines get flushed.
pub fn init(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let dir = log_dir(settings)?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter(settings))
        .finish();

    tracing::subscriber::set_global_default(subscriber).ok()?;
    Some(guard)
}

//! File logging setup.
//!
//! Log lines roll daily under `<textfold home>/logs`. Nothing is written to
//! stdout or stderr, which the TUI owns while the terminal is in raw mode.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

const DEFAULT_FILTER: &str = "textfold=info,textfold_core=info,textfold_tui=info";

/// Keeps the non-blocking appender alive; dropping it flushes buffered
/// lines and stops the writer thread.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Initializes daily-rolling file logging.
///
/// Returns `None` when no log directory can be created or another
/// subscriber is already installed; the process runs unlogged then.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "textfold.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

fn ensure_log_dir() -> Option<PathBuf> {
    let dir = paths::logs_dir();
    if std::fs::create_dir_all(&dir).is_ok() {
        return Some(dir);
    }

    let fallback = std::env::temp_dir().join("textfold").join("logs");
    std::fs::create_dir_all(&fallback).ok()?;
    Some(fallback)
}

//! File-only tracing setup.
//!
//! The terminal belongs to the UI, so nothing is ever logged to stdout or
//! stderr. Without a log directory no subscriber is installed.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Keeps the background writer alive; drop it last to flush.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn init_tracing(config: &AppConfig) -> Option<FileLogGuard> {
    let log_dir = config.log_dir.as_deref()?;
    init_file_tracing(log_dir, &config.log_filter)
}

fn init_file_tracing(log_dir: &Path, filter: &str) -> Option<FileLogGuard> {
    if let Err(err) = std::fs::create_dir_all(log_dir) {
        eprintln!("failed to create log directory {}: {err}", log_dir.display());
        return None;
    }

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "oshi-vocab.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    Some(FileLogGuard { _guard: guard })
}

//! Logging setup.
//!
//! Two layers on one registry: a human-readable stdout layer and a daily
//! rotated one-line JSON file. `log` macros from dependencies are bridged
//! into `tracing` via `LogTracer`. `RUST_LOG` overrides both filters.

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();
// The guard must live for the process lifetime or buffered lines are lost.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn init_logger(log_dir: PathBuf) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;
    let _ = LOG_DIR.set(log_dir.clone());

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, "cadence.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(file_filter());

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_filter(stdout_filter());

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "cadence::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

fn file_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,cadence=debug"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn stdout_filter() -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        "debug,cadence=trace"
    } else {
        "info,cadence=info"
    };

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_log_dir_and_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let log_dir = tmp.path().join("logs");

        init_logger(log_dir.clone()).expect("first init");
        init_logger(log_dir.clone()).expect("repeat init");

        assert!(log_dir.is_dir());
        assert_eq!(get_log_dir(), Some(log_dir));
    }
}

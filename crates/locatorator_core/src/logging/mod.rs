//! Logging setup for Locatorator.
//!
//! The library itself only emits `tracing` events; front ends pick a
//! subscriber once at startup:
//!
//! - [`init_tracing`] writes to stderr
//! - [`init_tracing_with_file`] also writes to a daily rolling file
//!
//! `RUST_LOG` overrides the configured level in both.
//!
//! # Example
//!
//! ```no_run
//! use locatorator_core::logging::{init_tracing_with_file, LogLevel};
//!
//! let _guard = init_tracing_with_file(LogLevel::Debug, ".logs").unwrap();
//! tracing::info!("Comparing cuts");
//! ```

mod types;

pub use types::LogLevel;

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for rolling log files.
pub const LOG_FILE_PREFIX: &str = "locatorator.log";

/// Initialize global tracing subscriber writing to stderr.
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing to stderr and a daily log file under `log_dir`.
///
/// Keep the returned guard alive for as long as file output is wanted;
/// dropping it flushes and stops the background writer.
pub fn init_tracing_with_file(
    default_level: LogLevel,
    log_dir: impl AsRef<Path>,
) -> io::Result<WorkerGuard> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter(default_level))
        .init();

    Ok(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

//! Logging Setup
//!
//! tracing-based logging with env-filter control and optional rolling
//! file output. The shell calls one of these once at startup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::helpers::get_or_create_data_dir;

fn default_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Initialize logging to stderr
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .init();
}

/// Initialize logging to a daily-rolling file in the platform data
/// directory.
///
/// The returned guard must be held for the lifetime of the process;
/// dropping it stops the background writer and loses buffered lines.
pub fn init_file_logging() -> Result<WorkerGuard> {
    let log_dir = get_or_create_data_dir()?;
    let appender = tracing_appender::rolling::daily(log_dir, "castadmin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

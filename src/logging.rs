//! File logging setup.
//!
//! The terminal belongs to the UI, so log output goes to a daily rolling file
//! through a non-blocking writer.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "dtmp-tui";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Install the global tracing subscriber.
///
/// # Arguments
/// * `config` - Configuration supplying log level and directory
///
/// # Returns
/// * `Result<WorkerGuard>` - Guard that flushes buffered lines when dropped;
///   keep it alive until shutdown
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let dir = config.log_dir_path()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&dir)
        .with_context(|| format!("Failed to create log file in {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(&config.log_level)?)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Build the level filter; `RUST_LOG` takes precedence over the configured level.
fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_levels_and_directives() {
        assert!(env_filter("info").is_ok());
        assert!(env_filter("dtmp_tui=debug,warn").is_ok());
    }
}

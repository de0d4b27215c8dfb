//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so tracing output goes to a daily file
//! `starling_<date>.log` in the configured log directory (default:
//! `starling/logs` under the platform local data dir). `RUST_LOG` overrides
//! the configured level.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Expand a leading `~/` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

/// Log file path for `date` (formatted `%Y-%m-%d`).
pub fn log_file_path(log_dir: &Path, date: chrono::NaiveDate) -> PathBuf {
    log_dir.join(format!("starling_{}.log", date.format("%Y-%m-%d")))
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when logging is disabled.
pub fn init(config: &LoggingConfig) -> io::Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)?;
    let path = log_file_path(&log_dir, chrono::Local::now().date_naive());
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(Some(path))
}

//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to the rotating log file.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::{get_data_dir, get_log_path};
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `<data_dir>/hacker-stories.log`. Stdout is left alone
/// because the shell draws there.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use hacker_stories::observability::init_tracing;
/// use hacker_stories::Config;
///
/// let dir = std::env::temp_dir().join("hacker-stories-doc");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(dir.display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir(config);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let writer = FileWriter::new(get_log_path(config));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

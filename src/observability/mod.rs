//! File-based structured logging.
//!
//! `tracing` events and spans are formatted by `tracing-subscriber` and
//! written to a rotating log file in the data directory, so the terminal stays
//! free for the shell.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → hacker-stories.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data_dir>/hacker-stories.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;

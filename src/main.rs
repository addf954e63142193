//! Terminal shell and entry point.
//!
//! This binary is the thin integration layer between the Hacker Stories
//! library and a line-oriented terminal. It reads commands from stdin,
//! forwards them to the [`QueryController`] as intents, and re-renders the
//! snapshot whenever something visible changed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │  current_thread Tokio runtime    │
//! │  ┌────────────────────────────┐  │
//! │  │  select! loop              │  │  ← stdin lines, worker responses
//! │  │   └─ QueryController       │  │  ← state, persistence
//! │  └────────────────────────────┘  │
//! │          │ spawn                 │
//! │          ▼                       │
//! │  ┌────────────────────────────┐  │
//! │  │  fetch tasks (reqwest)     │  │  ← one per search
//! │  └────────────────────────────┘  │
//! └──────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: Resolve configuration, initialize tracing
//! 2. **Build**: Open the state file, build the HTTP client
//! 3. **Initialize**: Restore the last term and start the first fetch
//! 4. **Loop**: Apply commands and responses, render on change
//!
//! # Commands
//!
//! - `type <text>`: Set the search input
//! - `search`: Search for the input
//! - `read <id>`: Toggle a story's read flag
//! - `help`: Show commands
//! - `quit`: Exit (also on end of input)

#![allow(clippy::multiple_crate_versions)]

use hacker_stories::ui::input::HELP;
use hacker_stories::ui::{render_snapshot, ShellCommand, DEFAULT_COLS};
use hacker_stories::{build_controller, Config, QueryController};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Instrument;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let (config, config_error) = match Config::discover() {
        Ok(config) => (config, None),
        Err(e) => (Config::default().with_pairs(&Config::env_pairs()), Some(e)),
    };
    hacker_stories::observability::init_tracing(&config);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid configuration file, using defaults");
        eprintln!("warning: {e}; using defaults");
    }

    let mut controller = match build_controller(&config) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!(error = %e, "failed to start");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    controller.initialize(&config.default_term);
    redraw(&controller);

    run(&mut controller).instrument(tracing::debug_span!("shell")).await;

    tracing::debug!("shell exiting");
    ExitCode::SUCCESS
}

/// Processes stdin commands and worker responses until `quit` or end of input.
async fn run(controller: &mut QueryController) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => return,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read stdin");
                        return;
                    }
                };

                let Some(command) = ShellCommand::parse(&line) else {
                    if !line.trim().is_empty() {
                        println!("unknown command, try `help`");
                    }
                    continue;
                };

                tracing::debug!(command = ?command, "shell command");
                let changed = match command {
                    ShellCommand::Type(text) => controller.on_input_change(&text),
                    ShellCommand::Search => controller.on_submit(),
                    ShellCommand::Read(id) => controller.on_toggle_read(&id),
                    ShellCommand::Help => {
                        println!("{HELP}");
                        false
                    }
                    ShellCommand::Quit => return,
                };
                if changed {
                    redraw(controller);
                }
            }
            changed = controller.next_response() => match changed {
                Some(true) => redraw(controller),
                Some(false) => {}
                None => return,
            },
        }
    }
}

fn redraw(controller: &QueryController) {
    let mut stdout = std::io::stdout().lock();
    let result = writeln!(stdout)
        .and_then(|()| render_snapshot(&controller.snapshot(), DEFAULT_COLS, &mut stdout));
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to render");
    }
}

//! Single-line message renderers.
//!
//! Used for the error banner and for the body when there is nothing to list
//! (`Loading...`, `Not found...`).

use std::io::{self, Write};

/// Renders a message in place of the story list.
pub fn render_message(message: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "  {message}")
}

/// Renders the error banner above the body.
pub fn render_banner(message: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "! {message}")
}

//! Header component renderer.

use crate::ui::helpers::centered;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Renders the title and subtitle, each centered on its own line.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE
/// [left padding] subtitle
/// ```
pub fn render_header(header: &HeaderInfo, cols: usize, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", centered(&header.title, cols))?;
    writeln!(out, "{}", centered(&header.subtitle, cols))
}

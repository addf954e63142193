//! Footer component renderer.

use crate::ui::helpers::centered;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Renders the command hints centered, truncated to the terminal width.
pub fn render_footer(footer: &FooterInfo, cols: usize, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", centered(&footer.keybindings, cols))
}

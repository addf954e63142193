//! Story list renderer.
//!
//! Every story takes two lines:
//!
//! ```text
//! [x] <id>  <title>
//!     <url> | by <author> | <points> points | <comments> comments | <toggle label>
//! ```
//!
//! The marker is `[x]` for read stories and `[ ]` otherwise. Stories without a
//! url (comments, Ask HN) skip the url column.

use crate::ui::helpers::truncate;
use crate::ui::viewmodel::StoryRow;
use std::io::{self, Write};

/// Renders all rows in order.
pub fn render_rows(rows: &[StoryRow], cols: usize, out: &mut dyn Write) -> io::Result<()> {
    for row in rows {
        render_row(row, cols, out)?;
    }
    Ok(())
}

fn render_row(row: &StoryRow, cols: usize, out: &mut dyn Write) -> io::Result<()> {
    let marker = if row.is_read { "[x]" } else { "[ ]" };
    let prefix = format!("{marker} {}  ", row.id);
    let title_room = cols.saturating_sub(prefix.chars().count());
    writeln!(out, "{prefix}{}", truncate(&row.title, title_room))?;

    let mut details = Vec::with_capacity(5);
    if !row.url.is_empty() {
        details.push(row.url.clone());
    }
    details.push(format!("by {}", row.author));
    details.push(format!("{} points", row.score));
    details.push(format!("{} comments", row.comment_count));
    details.push(row.toggle_label.clone());

    writeln!(out, "    {}", truncate(&details.join(" | "), cols.saturating_sub(4)))
}

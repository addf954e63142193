//! Search bar component renderer.

use crate::ui::helpers::truncate;
use crate::ui::viewmodel::SearchBarInfo;
use std::io::{self, Write};

/// Renders the search input with the submit affordance.
///
/// A disabled submit is shown in brackets so the user can tell an empty term
/// will not be searched.
pub fn render_search_bar(search: &SearchBarInfo, cols: usize, out: &mut dyn Write) -> io::Result<()> {
    let submit = if search.can_submit { "Submit" } else { "[Submit disabled]" };
    let label = "Search: ";
    let room = cols.saturating_sub(label.len() + submit.len() + 3);
    writeln!(out, "{label}{} | {submit}", truncate(&search.term, room))
}

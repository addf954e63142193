//! Composable UI component renderers.
//!
//! Each component writes one part of the frame as plain text.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`search`]: Search input line and submit state
//! - [`table`]: Story rows
//! - [`empty`]: Error banner and single-line messages
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! Header
//! SearchBar
//! ──────────
//! [error banner]
//! Loading... | rows | Not found...
//! ──────────
//! Footer
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::rule;
use crate::ui::viewmodel::{ListBody, ListViewModel};
use std::io::{self, Write};

use empty::{render_banner, render_message};
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::render_rows;

/// Writes every component of the frame in layout order.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_list(vm: &ListViewModel, cols: usize, out: &mut dyn Write) -> io::Result<()> {
    render_header(&vm.header, cols, out)?;
    render_search_bar(&vm.search_bar, cols, out)?;
    writeln!(out, "{}", rule(cols))?;

    if let Some(banner) = &vm.error_banner {
        render_banner(banner, out)?;
    }

    match &vm.body {
        ListBody::Loading(message) | ListBody::Empty(message) => render_message(message, out)?,
        ListBody::Rows(rows) => render_rows(rows, cols, out)?,
    }

    writeln!(out, "{}", rule(cols))?;
    render_footer(&vm.footer, cols, out)
}

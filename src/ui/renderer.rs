//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform a `Snapshot` into a `ListViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Output is plain text with no cursor control, so it works the same on a
//! terminal, in a pipe and in tests.

use crate::app::Snapshot;
use crate::ui::components;
use crate::ui::viewmodel::ListViewModel;
use std::io::{self, Write};

/// Default frame width when the terminal size is unknown.
pub const DEFAULT_COLS: usize = 80;

/// Renders a snapshot.
///
/// # Errors
///
/// Returns any error from `out`.
///
/// # Example
///
/// ```rust
/// use hacker_stories::app::Snapshot;
/// use hacker_stories::ui::render_snapshot;
///
/// let snapshot = Snapshot {
///     term: "React".to_string(),
///     request_url: String::new(),
///     items: vec![],
///     is_loading: false,
///     is_error: true,
///     can_submit: true,
/// };
///
/// let mut out = Vec::new();
/// render_snapshot(&snapshot, 60, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Something went wrong..."));
/// assert!(text.contains("Not found..."));
/// ```
pub fn render_snapshot<W: Write>(snapshot: &Snapshot, cols: usize, out: &mut W) -> io::Result<()> {
    render(&ListViewModel::from_snapshot(snapshot), cols, out)
}

/// Renders a pre-computed view model and flushes `out`.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render<W: Write>(vm: &ListViewModel, cols: usize, out: &mut W) -> io::Result<()> {
    let _span = tracing::trace_span!("render", cols = cols).entered();
    components::render_list(vm, cols, out)?;
    out.flush()
}

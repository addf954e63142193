//! Shared text layout utilities.
//!
//! All helpers operate on `char` counts rather than bytes so titles with
//! non-ASCII characters are never cut in the middle of a code point.

/// Shortens `text` to at most `width` characters, marking the cut with `...`.
///
/// # Example
///
/// ```rust
/// use hacker_stories::ui::helpers::truncate;
///
/// assert_eq!(truncate("Hacker Stories", 9), "Hacker...");
/// assert_eq!(truncate("short", 9), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Centers `text` in a line of `cols` characters.
///
/// Text wider than the line is truncated. Left padding is never larger than
/// right padding.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let text = truncate(text, cols);
    let padding = cols.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// A horizontal rule spanning `cols` characters.
#[must_use]
pub fn rule(cols: usize) -> String {
    "─".repeat(cols)
}

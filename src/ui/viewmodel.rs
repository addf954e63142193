//! View model types representing renderable UI state.
//!
//! View models are computed from a [`Snapshot`] and consumed by the renderer.
//! They contain no business logic, only display-ready strings and flags.
//!
//! # Example
//!
//! ```rust
//! use hacker_stories::app::Snapshot;
//! use hacker_stories::ui::viewmodel::{ListBody, ListViewModel};
//!
//! let snapshot = Snapshot {
//!     term: "React".to_string(),
//!     request_url: String::new(),
//!     items: vec![],
//!     is_loading: true,
//!     is_error: false,
//!     can_submit: true,
//! };
//!
//! let vm = ListViewModel::from_snapshot(&snapshot);
//! assert_eq!(vm.body, ListBody::Loading("Loading...".to_string()));
//! ```

use crate::app::Snapshot;
use crate::domain::Story;

/// Title shown at the top of the screen.
pub const TITLE: &str = "Hacker Stories";

/// Line under the title.
pub const SUBTITLE: &str = "Find stories on Hacker News.";

/// Banner shown while the last committed fetch is failed.
pub const ERROR_MESSAGE: &str = "Something went wrong...";

/// Body text while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Body text when the list is empty.
pub const EMPTY_MESSAGE: &str = "Not found...";

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Title and subtitle.
    pub header: HeaderInfo,

    /// Current input and whether submit is enabled.
    pub search_bar: SearchBarInfo,

    /// Error banner, shown above the body.
    pub error_banner: Option<String>,

    /// Main content.
    pub body: ListBody,

    /// Help text.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Secondary line under the title.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub term: String,

    /// Whether the submit affordance is enabled.
    pub can_submit: bool,
}

/// What fills the area under the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// A fetch is in flight; items are hidden.
    Loading(String),

    /// Stories to list.
    Rows(Vec<StoryRow>),

    /// Nothing to list.
    Empty(String),
}

/// One line of the story list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRow {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub score: u32,
    pub comment_count: u32,
    pub is_read: bool,

    /// `Mark as read` or `Mark as unread`.
    pub toggle_label: String,
}

impl From<&Story> for StoryRow {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id.clone(),
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            score: story.score,
            comment_count: story.comment_count,
            is_read: story.is_read,
            toggle_label: story.toggle_label().to_string(),
        }
    }
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}

impl ListViewModel {
    /// Computes the view model for a snapshot.
    ///
    /// Loading hides the list even when items are present. The error banner is
    /// independent of the body.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let body = if snapshot.is_loading {
            ListBody::Loading(LOADING_MESSAGE.to_string())
        } else if snapshot.items.is_empty() {
            ListBody::Empty(EMPTY_MESSAGE.to_string())
        } else {
            ListBody::Rows(snapshot.items.iter().map(StoryRow::from).collect())
        };

        Self {
            header: HeaderInfo {
                title: TITLE.to_string(),
                subtitle: SUBTITLE.to_string(),
            },
            search_bar: SearchBarInfo {
                term: snapshot.term.clone(),
                can_submit: snapshot.can_submit,
            },
            error_banner: snapshot.is_error.then(|| ERROR_MESSAGE.to_string()),
            body,
            footer: FooterInfo {
                keybindings: "type <text> | search | read <id> | help | quit".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(items: Vec<Story>, is_loading: bool, is_error: bool) -> Snapshot {
        Snapshot {
            term: "React".to_string(),
            request_url: String::new(),
            items,
            is_loading,
            is_error,
            can_submit: true,
        }
    }

    #[test]
    fn loading_hides_items() {
        let vm = ListViewModel::from_snapshot(&snapshot(vec![Story::new("0", "React")], true, false));
        assert_eq!(vm.body, ListBody::Loading(LOADING_MESSAGE.to_string()));
        assert!(vm.error_banner.is_none());
    }

    #[test]
    fn rows_carry_toggle_labels() {
        let mut read = Story::new("1", "Redux");
        read.is_read = true;

        let vm = ListViewModel::from_snapshot(&snapshot(vec![Story::new("0", "React"), read], false, false));

        let ListBody::Rows(rows) = vm.body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].toggle_label, "Mark as read");
        assert_eq!(rows[1].toggle_label, "Mark as unread");
    }

    #[test]
    fn empty_list_is_not_found() {
        let vm = ListViewModel::from_snapshot(&snapshot(vec![], false, false));
        assert_eq!(vm.body, ListBody::Empty(EMPTY_MESSAGE.to_string()));
    }

    #[test]
    fn error_banner_sits_above_kept_items() {
        let vm = ListViewModel::from_snapshot(&snapshot(vec![Story::new("0", "React")], false, true));

        assert_eq!(vm.error_banner.as_deref(), Some(ERROR_MESSAGE));
        assert!(matches!(vm.body, ListBody::Rows(ref rows) if rows.len() == 1));
    }

    #[test]
    fn search_bar_mirrors_submit_state() {
        let mut snap = snapshot(vec![], false, false);
        snap.term = String::new();
        snap.can_submit = false;

        let vm = ListViewModel::from_snapshot(&snap);

        assert_eq!(vm.search_bar, SearchBarInfo { term: String::new(), can_submit: false });
    }
}

//! Pure reducer for the story collection.
//!
//! [`reduce`] takes the previous [`FetchState`] by reference and returns a new
//! one. Inputs are never mutated, so anything holding the old state (a view
//! model, a snapshot handed to a renderer) keeps seeing exactly what it saw.

use super::lifecycle::FetchStatus;
use crate::domain::Story;
use std::collections::HashSet;

/// Story collection plus the status of the fetch that produced it.
///
/// `items` is only replaced on success. While loading and after a failure the
/// previous items stay visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub status: FetchStatus,
    pub items: Vec<Story>,
}

impl FetchState {
    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Whether the last committed fetch failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Failed
    }
}

/// Events accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryEvent {
    /// A fetch was started.
    FetchStarted,
    /// The current fetch returned these stories.
    FetchSucceeded(Vec<Story>),
    /// The current fetch failed.
    FetchFailed,
    /// Flip the read flag of the story with this id.
    ToggleRead(String),
    /// Drop the story with this id.
    RemoveItem(String),
}

/// Applies one event to a state and returns the resulting state.
///
/// # Examples
///
/// ```
/// use hacker_stories::app::reducer::{reduce, FetchState, StoryEvent};
/// use hacker_stories::Story;
///
/// let loaded = reduce(
///     &FetchState::default(),
///     &StoryEvent::FetchSucceeded(vec![Story::new("0", "React")]),
/// );
/// let toggled = reduce(&loaded, &StoryEvent::ToggleRead("0".to_string()));
///
/// assert!(!loaded.items[0].is_read);
/// assert!(toggled.items[0].is_read);
/// ```
#[must_use]
pub fn reduce(state: &FetchState, event: &StoryEvent) -> FetchState {
    match event {
        StoryEvent::FetchStarted => FetchState {
            status: FetchStatus::Loading,
            items: state.items.clone(),
        },
        StoryEvent::FetchSucceeded(payload) => FetchState {
            status: FetchStatus::Succeeded,
            items: fresh_items(payload),
        },
        StoryEvent::FetchFailed => FetchState {
            status: FetchStatus::Failed,
            items: state.items.clone(),
        },
        StoryEvent::ToggleRead(id) => FetchState {
            status: state.status,
            items: state
                .items
                .iter()
                .map(|story| {
                    if &story.id == id {
                        Story {
                            is_read: !story.is_read,
                            ..story.clone()
                        }
                    } else {
                        story.clone()
                    }
                })
                .collect(),
        },
        StoryEvent::RemoveItem(id) => FetchState {
            status: state.status,
            items: state
                .items
                .iter()
                .filter(|story| &story.id != id)
                .cloned()
                .collect(),
        },
    }
}

/// Stamps every story unread and keeps the first story for each id.
fn fresh_items(payload: &[Story]) -> Vec<Story> {
    let mut seen = HashSet::with_capacity(payload.len());
    let items: Vec<Story> = payload
        .iter()
        .filter(|story| seen.insert(story.id.as_str()))
        .map(|story| Story {
            is_read: false,
            ..story.clone()
        })
        .collect();

    if items.len() != payload.len() {
        tracing::debug!(
            dropped = payload.len() - items.len(),
            "dropped stories with duplicate ids"
        );
    }
    items
}

//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the presentation layer (`main.rs` and [`ui`](crate::ui))
//! and the domain/storage/worker layers. It implements the event-driven core
//! that decides what is fetched, what is committed, and what is shown.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Intent → Events → Event Handler → State Mutations → Actions → Side Effects
//!                            ↑                                  ↓
//!                            └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Owner of the state; executes actions and drains responses
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`lifecycle`]: Fetch ticket state machine deciding which response commits
//! - [`reducer`]: Pure transitions of the story collection
//! - [`state`]: Central application state container and snapshot computation
//!
//! # Example
//!
//! ```rust
//! use hacker_stories::app::{handle_event, AppState, Event};
//! use hacker_stories::domain::query::DEFAULT_ENDPOINT;
//!
//! let mut state = AppState::new(DEFAULT_ENDPOINT);
//! let (_, actions) = handle_event(&mut state, &Event::Initialize { term: "React".into() })?;
//! assert_eq!(actions.len(), 2);
//! assert!(state.snapshot().is_loading);
//! # Ok::<(), hacker_stories::StoriesError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod lifecycle;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use controller::QueryController;
pub use handler::{handle_event, Event};
pub use lifecycle::{FetchLifecycle, FetchStatus};
pub use reducer::{reduce, FetchState, StoryEvent};
pub use state::{AppState, Snapshot};

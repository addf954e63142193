//! Presentation layer: view models, plain-text rendering and shell commands.
//!
//! # Architecture
//!
//! ```text
//! Snapshot → ListViewModel::from_snapshot → ListViewModel → render → text
//! stdin line → ShellCommand::parse → controller intent
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text layout utilities
//! - [`input`]: Shell command parsing

pub mod components;
pub mod helpers;
pub mod input;
pub mod renderer;
pub mod viewmodel;

pub use input::ShellCommand;
pub use renderer::{render, render_snapshot, DEFAULT_COLS};
pub use viewmodel::{FooterInfo, HeaderInfo, ListBody, ListViewModel, SearchBarInfo, StoryRow};

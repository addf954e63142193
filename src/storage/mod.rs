//! Storage layer for the persisted search term.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-process storage implementation
//! - `models`: On-disk record types
//! - `persisted`: Best-effort wrapper used by the controller

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;
pub mod persisted;

pub use backend::KeyValueStore;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use models::EntryRecord;
pub use persisted::PersistedQuery;

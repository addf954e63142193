//! Background fetch worker.
//!
//! This module runs network calls off the event-processing path so the
//! controller never blocks on I/O.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types and fetch tickets
//! - `handler`: Worker implementation spawning one task per fetch

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{FetchOutcome, FetchTicket, WorkerMessage, WorkerResponse};

//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo data model and the in-memory store, independent of the
//! HTTP layer. The server crate wires these into axum handlers; keeping the
//! store here means it can be exercised directly in unit tests without
//! standing up a router.
//!
//! # Design
//! - `Todo` is the persisted entity; `TodoItemDto` is the only shape that
//!   leaves the service, so internal fields cannot leak.
//! - `TodoStore` assigns ids itself and its lookups return `Option` — the
//!   caller branches on presence, never on a sentinel.

pub mod store;
pub mod types;

pub use store::TodoStore;
pub use types::{Todo, TodoItemDto, TodoItemInput};

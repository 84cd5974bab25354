//! Domain types for the todo service.
//!
//! # Design
//! The persisted `Todo` entity and its public transfer representation are
//! deliberately separate types. `Todo` carries the internal `secret` field
//! and does not derive `Serialize`, so internal state cannot reach the wire
//! by accident — every read response goes through `TodoItemDto`, and every
//! write payload comes in as `TodoItemInput`, which has no `id` field.

use serde::{Deserialize, Serialize};

/// A persisted todo record. Lives only inside the store; never serialized
/// directly — see [`TodoItemDto`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub is_complete: bool,
    /// Internal-only attribute, excluded from the public projection.
    pub secret: Option<String>,
}

/// The public projection of a [`Todo`]: `id`, `name`, `isComplete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: u64,
    pub name: String,
    pub is_complete: bool,
}

impl From<&Todo> for TodoItemDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name.clone(),
            is_complete: todo.is_complete,
        }
    }
}

/// Write payload for create and update.
///
/// There is no `id` field: the store is the sole authority for id
/// assignment, and serde drops any id a client sends anyway. Both fields
/// default when omitted, so a PUT that leaves out `isComplete` resets it
/// to false — the update always overwrites both mutable fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

//! In-memory todo store with monotonic id assignment.
//!
//! # Design
//! `TodoStore` is a cheap-to-clone handle over `Arc<RwLock<..>>`; every
//! handler gets its own clone and all clones share the same records. Records
//! live in a `BTreeMap<u64, Todo>` keyed by id — ids only count upward, so
//! id order is insertion order and list responses come back in the order
//! records were created. The counter never rewinds, even after deletes, so
//! an id is never reused within the process lifetime.
//!
//! Lookups return `Option`; mutations check existence first and return
//! `None` without side effects when the id is absent. Conflicting writes
//! are serialized by the lock — no further concurrency discipline is
//! needed for a single-process in-memory deployment.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::{Todo, TodoItemInput};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    todos: BTreeMap<u64, Todo>,
}

/// Shared handle to the process-local todo collection.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in id (= insertion) order.
    pub async fn list(&self) -> Vec<Todo> {
        let inner = self.inner.read().await;
        inner.todos.values().cloned().collect()
    }

    /// The subset of records with `is_complete == true`, in id order.
    pub async fn list_complete(&self) -> Vec<Todo> {
        let inner = self.inner.read().await;
        inner
            .todos
            .values()
            .filter(|t| t.is_complete)
            .cloned()
            .collect()
    }

    pub async fn find(&self, id: u64) -> Option<Todo> {
        let inner = self.inner.read().await;
        inner.todos.get(&id).cloned()
    }

    /// Create a record from the payload. The store assigns the id; any id
    /// the client sent was already dropped during deserialization.
    pub async fn insert(&self, input: TodoItemInput) -> Todo {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            name: input.name,
            is_complete: input.is_complete,
            secret: None,
        };
        inner.todos.insert(todo.id, todo.clone());
        todo
    }

    /// Overwrite `name` and `is_complete` of an existing record. The id is
    /// untouched. Returns `None` without side effects when the id is absent.
    pub async fn update(&self, id: u64, input: TodoItemInput) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let todo = inner.todos.get_mut(&id)?;
        todo.name = input.name;
        todo.is_complete = input.is_complete;
        Some(todo.clone())
    }

    /// Remove a record, returning it, or `None` when the id is absent.
    /// The id is not freed for reuse.
    pub async fn remove(&self, id: u64) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        inner.todos.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, is_complete: bool) -> TodoItemInput {
        TodoItemInput {
            name: name.to_string(),
            is_complete,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = TodoStore::new();
        assert!(store.list().await.is_empty());
        assert!(store.list_complete().await.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_distinct_increasing_ids() {
        let store = TodoStore::new();
        let first = store.insert(input("one", false)).await;
        let second = store.insert(input("two", false)).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() {
        let store = TodoStore::new();
        let first = store.insert(input("one", false)).await;
        store.remove(first.id).await.unwrap();
        let second = store.insert(input("two", false)).await;
        assert_ne!(second.id, first.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn find_returns_the_inserted_record() {
        let store = TodoStore::new();
        let created = store.insert(input("Buy milk", false)).await;
        let found = store.find(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_absent_id_returns_none() {
        let store = TodoStore::new();
        assert!(store.find(999).await.is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = TodoStore::new();
        store.insert(input("a", false)).await;
        store.insert(input("b", true)).await;
        store.insert(input("c", false)).await;
        let names: Vec<String> = store.list().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn list_complete_filters_on_the_flag() {
        let store = TodoStore::new();
        store.insert(input("pending", false)).await;
        let done = store.insert(input("done", true)).await;
        store.insert(input("also pending", false)).await;

        let complete = store.list_complete().await;
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0].id, done.id);
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn update_overwrites_both_fields_and_keeps_id() {
        let store = TodoStore::new();
        let created = store.insert(input("Buy milk", false)).await;

        let updated = store
            .update(created.id, input("Buy oat milk", true))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Buy oat milk");
        assert!(updated.is_complete);

        let fetched = store.find(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_with_default_fields_resets_them() {
        // A payload that omitted both fields deserializes to the defaults;
        // the overwrite applies them as-is.
        let store = TodoStore::new();
        let created = store.insert(input("Walk dog", true)).await;
        let updated = store.update(created.id, input("", false)).await.unwrap();
        assert_eq!(updated.name, "");
        assert!(!updated.is_complete);
    }

    #[tokio::test]
    async fn update_absent_id_is_a_noop() {
        let store = TodoStore::new();
        store.insert(input("keep me", false)).await;
        assert!(store.update(999, input("ghost", true)).await.is_none());
        let all = store.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "keep me");
    }

    #[tokio::test]
    async fn remove_then_find_returns_none() {
        let store = TodoStore::new();
        let created = store.insert(input("gone soon", false)).await;
        let removed = store.remove(created.id).await.unwrap();
        assert_eq!(removed, created);
        assert!(store.find(created.id).await.is_none());
    }

    #[tokio::test]
    async fn remove_absent_id_returns_none_both_times() {
        let store = TodoStore::new();
        let created = store.insert(input("once", false)).await;
        assert!(store.remove(created.id).await.is_some());
        assert!(store.remove(created.id).await.is_none());
        assert!(store.remove(created.id).await.is_none());
    }

    #[tokio::test]
    async fn insert_never_populates_secret() {
        let store = TodoStore::new();
        let created = store.insert(input("plain", false)).await;
        assert!(created.secret.is_none());
    }
}

//! One named handler per operation.
//!
//! # Design
//! Each handler takes the store as an explicit `State` parameter — no
//! closures over ambient state, no container. Reads respond with
//! `TodoItemDto`; id-scoped operations branch on the store's `Option`
//! result and map absence to `ApiError::NotFound` before any side effect.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use todo_core::{TodoItemDto, TodoItemInput, TodoStore};

use crate::error::ApiError;

/// GET /todoitems — every record, in store order.
pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<TodoItemDto>> {
    let todos = store.list().await;
    Json(todos.iter().map(TodoItemDto::from).collect())
}

/// GET /todoitems/complete — only records with `isComplete == true`.
pub async fn list_complete_todos(State(store): State<TodoStore>) -> Json<Vec<TodoItemDto>> {
    let todos = store.list_complete().await;
    Json(todos.iter().map(TodoItemDto::from).collect())
}

/// GET /todoitems/{id}
pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<u64>,
) -> Result<Json<TodoItemDto>, ApiError> {
    match store.find(id).await {
        Some(todo) => Ok(Json(TodoItemDto::from(&todo))),
        None => {
            tracing::debug!(id, "get: todo not found");
            Err(ApiError::NotFound)
        }
    }
}

/// POST /todoitems — the store assigns the id; the response carries a
/// `Location` header pointing at the new resource.
pub async fn create_todo(
    State(store): State<TodoStore>,
    Json(input): Json<TodoItemInput>,
) -> impl IntoResponse {
    let todo = store.insert(input).await;
    tracing::debug!(id = todo.id, "created todo");
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/todoitems/{}", todo.id))],
        Json(TodoItemDto::from(&todo)),
    )
}

/// PUT /todoitems/{id} — overwrites `name` and `isComplete`; 204 on
/// success, 404 when the id is absent.
pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<u64>,
    Json(input): Json<TodoItemInput>,
) -> Result<StatusCode, ApiError> {
    match store.update(id, input).await {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => {
            tracing::debug!(id, "update: todo not found");
            Err(ApiError::NotFound)
        }
    }
}

/// DELETE /todoitems/{id} — 204 on success, 404 when the id is absent.
pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    match store.remove(id).await {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => {
            tracing::debug!(id, "delete: todo not found");
            Err(ApiError::NotFound)
        }
    }
}

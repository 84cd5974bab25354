//! HTTP surface for the todo service.
//!
//! # Overview
//! Five CRUD routes under `/todoitems` against the in-memory `TodoStore`,
//! plus the OpenAPI document and Swagger UI in Development. `app` wires an
//! injected store handle into the router; `run` owns store construction
//! and the serve loop.
//!
//! # Design
//! The hosting layer (axum) handles request dispatch, deserialization, and
//! fault-to-response translation; the handlers only model the not-found
//! case themselves. Each store access is async and may suspend on the
//! store's lock — handlers contain no parallelism of their own.

pub mod config;
pub mod docs;
pub mod error;
pub mod routes;

use axum::routing::get;
use axum::Router;
use todo_core::TodoStore;
use tokio::net::TcpListener;

pub use config::{Config, Environment};
pub use error::ApiError;

/// Build the router around an injected store handle.
///
/// Swagger routes are mounted only in `Development`, matching the original
/// deployment behavior of exposing documentation off-production only.
pub fn app(store: TodoStore, environment: Environment) -> Router {
    let api = Router::new()
        .route(
            "/todoitems",
            get(routes::list_todos).post(routes::create_todo),
        )
        .route("/todoitems/complete", get(routes::list_complete_todos))
        .route(
            "/todoitems/{id}",
            get(routes::get_todo)
                .put(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .with_state(store);

    if environment.is_development() {
        api.merge(docs::router())
    } else {
        api
    }
}

/// Create a fresh store and serve on the listener until shutdown. All
/// records are lost when the process exits.
pub async fn run(listener: TcpListener, environment: Environment) -> Result<(), std::io::Error> {
    let store = TodoStore::new();
    axum::serve(listener, app(store, environment)).await
}

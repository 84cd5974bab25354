//! OpenAPI document and interactive documentation page.
//!
//! # Design
//! The document is hand-maintained rather than derived from the handlers:
//! five operations and two schemas are small enough that a generator would
//! cost more than it saves, and the shape is pinned by tests. Both routes
//! are mounted by `app` only in Development.

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub const DOCUMENT_PATH: &str = "/swagger/v1/swagger.json";
pub const UI_PATH: &str = "/swagger";

pub fn router() -> Router {
    Router::new()
        .route(UI_PATH, get(swagger_ui))
        .route(DOCUMENT_PATH, get(openapi_document))
}

async fn openapi_document() -> Json<Value> {
    Json(document())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// The OpenAPI 3.0 description of the five todo operations.
pub fn document() -> Value {
    let todo_ref = json!({ "$ref": "#/components/schemas/TodoItemDto" });
    let todo_array = json!({
        "type": "array",
        "items": todo_ref.clone(),
    });
    let id_parameter = json!([{
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64", "minimum": 0 }
    }]);
    let input_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/TodoItemInput" }
            }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "TodoApi v1",
            "version": "v1"
        },
        "paths": {
            "/todoitems": {
                "get": {
                    "summary": "List all todo items",
                    "responses": {
                        "200": {
                            "description": "All todo items in store order",
                            "content": { "application/json": { "schema": todo_array.clone() } }
                        }
                    }
                },
                "post": {
                    "summary": "Create a todo item",
                    "requestBody": input_body.clone(),
                    "responses": {
                        "201": {
                            "description": "The created item, with its assigned id",
                            "headers": {
                                "Location": {
                                    "description": "Path of the new resource",
                                    "schema": { "type": "string" }
                                }
                            },
                            "content": { "application/json": { "schema": todo_ref.clone() } }
                        }
                    }
                }
            },
            "/todoitems/complete": {
                "get": {
                    "summary": "List completed todo items",
                    "responses": {
                        "200": {
                            "description": "Items with isComplete == true",
                            "content": { "application/json": { "schema": todo_array } }
                        }
                    }
                }
            },
            "/todoitems/{id}": {
                "get": {
                    "summary": "Get a todo item by id",
                    "parameters": id_parameter.clone(),
                    "responses": {
                        "200": {
                            "description": "The matching item",
                            "content": { "application/json": { "schema": todo_ref } }
                        },
                        "404": { "description": "No item with that id" }
                    }
                },
                "put": {
                    "summary": "Overwrite a todo item's name and isComplete",
                    "parameters": id_parameter.clone(),
                    "requestBody": input_body,
                    "responses": {
                        "204": { "description": "Updated" },
                        "404": { "description": "No item with that id" }
                    }
                },
                "delete": {
                    "summary": "Delete a todo item",
                    "parameters": id_parameter,
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": { "description": "No item with that id" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "TodoItemDto": {
                    "type": "object",
                    "required": ["id", "name", "isComplete"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "isComplete": { "type": "boolean" }
                    }
                },
                "TodoItemInput": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "default": "" },
                        "isComplete": { "type": "boolean", "default": false }
                    }
                }
            }
        }
    })
}

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>TodoAPI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/swagger/v1/swagger.json",
        dom_id: "#swagger-ui",
        docExpansion: "list",
      });
    };
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_operation() {
        let doc = document();
        assert_eq!(doc["info"]["title"], "TodoApi v1");
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths["/todoitems"]["get"].is_object());
        assert!(paths["/todoitems"]["post"].is_object());
        assert!(paths["/todoitems/complete"]["get"].is_object());
        assert!(paths["/todoitems/{id}"]["get"].is_object());
        assert!(paths["/todoitems/{id}"]["put"].is_object());
        assert!(paths["/todoitems/{id}"]["delete"].is_object());
    }

    #[test]
    fn public_schema_has_no_secret_field() {
        let doc = document();
        let dto = &doc["components"]["schemas"]["TodoItemDto"]["properties"];
        assert!(dto.get("secret").is_none());
        assert!(dto.get("isComplete").is_some());
    }
}

//! Todo routes - the todo item CRUD surface

use axum::{extract::State, http::StatusCode, Json};

use crate::db::Database;
use crate::error::ServerResult;
use crate::extract::{JsonBody, TodoId};
use crate::models::{CreateTodoRequest, DeleteConfirmation, TodoItem};

/// GET /todos - List all todo items
pub async fn list_todos(State(db): State<Database>) -> ServerResult<Json<Vec<TodoItem>>> {
    let todos = db.list_todos()?;
    Ok(Json(todos))
}

/// POST /todos - Create a new todo item
pub async fn create_todo(
    State(db): State<Database>,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> ServerResult<(StatusCode, Json<TodoItem>)> {
    let todo = db.create_todo(&req)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id} - Toggle the completion status of a todo item
pub async fn toggle_todo(
    State(db): State<Database>,
    TodoId(id): TodoId,
) -> ServerResult<Json<TodoItem>> {
    let todo = db.toggle_todo(id)?;
    Ok(Json(todo))
}

/// DELETE /todos/{id} - Permanently delete a todo item
pub async fn delete_todo(
    State(db): State<Database>,
    TodoId(id): TodoId,
) -> ServerResult<Json<DeleteConfirmation>> {
    let confirmation = db.delete_todo(id)?;
    Ok(Json(confirmation))
}

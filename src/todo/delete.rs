//! Todo deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    todo::{
        TodoId,
        db::delete_todo,
        list::{TodoState, todos_changed_response},
    },
};

/// Delete a todo.
pub async fn delete_todo_endpoint(
    Path(todo_id): Path<TodoId>,
    State(state): State<TodoState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_todo(todo_id, &connection) {
        Ok(_) => todos_changed_response(),
        Err(Error::DeleteMissingTodo) => Error::DeleteMissingTodo.into_alert_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while deleting todo {todo_id}: {error}");
            error.into_alert_response()
        }
    }
}

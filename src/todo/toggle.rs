//! Endpoint for marking a todo as done or not done.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    todo::{
        TodoId,
        db::toggle_todo,
        list::{TodoState, todos_changed_response},
    },
};

/// Flip whether a todo is done.
pub async fn toggle_todo_endpoint(
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

    match toggle_todo(todo_id, &connection) {
        Ok(_) => todos_changed_response(),
        Err(Error::ToggleMissingTodo) => Error::ToggleMissingTodo.into_alert_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while toggling todo {todo_id}: {error}");
            error.into_alert_response()
        }
    }
}

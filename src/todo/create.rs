//! Todo creation endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    Error,
    todo::{
        NewTodo, create_todo,
        domain::TodoFormData,
        list::{TodoState, todos_changed_response},
    },
};

/// Handle the new todo form.
///
/// A blank title does not create anything and does not reload the list.
pub async fn create_todo_endpoint(
    State(state): State<TodoState>,
    Form(form): Form<TodoFormData>,
) -> Response {
    let new_todo = match NewTodo::from_form(&form) {
        Ok(new_todo) => new_todo,
        Err(Error::EmptyTodoTitle) => {
            tracing::debug!("Ignoring new todo without a title");
            return StatusCode::NO_CONTENT.into_response();
        }
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_todo(new_todo, OffsetDateTime::now_utc(), &connection) {
        Ok(_) => todos_changed_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a todo: {error}");
            error.into_alert_response()
        }
    }
}

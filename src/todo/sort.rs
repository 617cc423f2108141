//! Endpoint for sorting the stored todos by priority.

use axum::{extract::State, response::Response};

use crate::{
    Error,
    todo::{
        db::sort_todos_by_priority,
        list::{TodoState, todos_changed_response},
    },
};

/// Reorder the todos once, highest priority first.
///
/// The new order is stored. Todos added or changed later are not re-sorted
/// until this endpoint is called again.
pub async fn sort_todos_endpoint(State(state): State<TodoState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match sort_todos_by_priority(&connection) {
        Ok(_) => todos_changed_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while sorting todos: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod sort_todos_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use time::OffsetDateTime;

    use crate::{
        storage::initialize,
        test_utils::get_header,
        todo::{
            NewTodo, Priority, TodoCategory, TodoTitle, create_todo, get_todos, list::TodoState,
            sort_todos_endpoint,
        },
    };

    #[tokio::test]
    async fn sorts_and_persists_todos() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        for (title, priority) in [
            ("a", Priority::Low),
            ("b", Priority::High),
            ("c", Priority::Medium),
            ("d", Priority::High),
        ] {
            create_todo(
                NewTodo {
                    title: TodoTitle::new_unchecked(title),
                    description: None,
                    priority,
                    category: TodoCategory::Other,
                    date: None,
                },
                OffsetDateTime::now_utc(),
                &connection,
            )
            .unwrap();
        }
        let state = TodoState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = sort_todos_endpoint(State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(get_header(&response, "hx-trigger"), "todos-changed");
        let titles = get_todos(&state.db_connection.lock().unwrap())
            .unwrap()
            .into_iter()
            .map(|todo| todo.title.to_string())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["b", "d", "c", "a"]);
    }
}

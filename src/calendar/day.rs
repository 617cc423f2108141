//! The listing of pending todos due on a calendar day.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    calendar::{
        grid::pending_todos_on,
        page::{CalendarState, DAY_TODOS_ID},
    },
    date::{iso_date, parse_iso_date},
    html::BADGE_STYLE,
    todo::{Todo, get_todos},
};

/// Render the todos that are due on `date` and not done yet.
pub async fn get_calendar_day_endpoint(
    Path(date): Path<String>,
    State(state): State<CalendarState>,
) -> Response {
    let date = match parse_iso_date(&date) {
        Ok(date) => date,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match get_todos(&connection) {
        Ok(todos) => day_todos_view(date, &pending_todos_on(&todos, date)).into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve todos: {error}");
            error.into_alert_response()
        }
    }
}

fn day_todos_view(date: Date, todos: &[&Todo]) -> Markup {
    html! {
        div id=(DAY_TODOS_ID) class="w-full max-w-3xl"
        {
            h3 class="mb-2 text-lg font-semibold" { "Due on " (iso_date(date)) }

            @if todos.is_empty() {
                p class="text-gray-500 dark:text-gray-400" { "Nothing due on this day." }
            } @else {
                ul class="space-y-2"
                {
                    @for todo in todos {
                        li
                            class="calendar-todo p-3 rounded bg-white dark:bg-gray-800 shadow-sm"
                            data-todo-id=(todo.id)
                        {
                            p class="todo-title font-medium" { (todo.title) }

                            @if let Some(description) = &todo.description {
                                p class="todo-description text-sm text-gray-600 dark:text-gray-300"
                                {
                                    (description)
                                }
                            }

                            div class="flex gap-2 mt-1"
                            {
                                span class={ "todo-priority " (BADGE_STYLE) }
                                {
                                    (todo.priority.label())
                                }
                                span class={ "todo-category " (BADGE_STYLE) }
                                {
                                    (todo.category.label())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

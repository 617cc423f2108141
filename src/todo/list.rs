//! The todo page and the filtered todo list fragment.
//!
//! The todo endpoints that change data do not render anything. They respond
//! with an `HX-Trigger: todos-changed` header and the list fetches itself
//! again with the filters currently selected in the filter form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use axum_htmx::HX_TRIGGER;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    date::iso_date,
    endpoints::{self, format_endpoint},
    html::{
        BADGE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, delete_button,
    },
    navigation::{Module, NavBar},
    todo::{
        Priority, Todo, TodoCategory,
        filter::{StatusFilter, TodoFilter},
        get_todos,
    },
};

/// The id of the element that holds the todo list.
const TODO_LIST_ID: &str = "todo-list";
/// The id of the filter form, its values are sent whenever the list is reloaded.
const TODO_FILTERS_ID: &str = "todo-filters";
/// The event that makes the todo list reload itself.
pub(super) const TODOS_CHANGED_EVENT: &str = "todos-changed";

/// The state needed by the todo page and endpoints.
#[derive(Debug, Clone)]
pub struct TodoState {
    /// The database connection for managing todos.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TodoState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response to a change to the todos: no content, plus the event that
/// tells the todo list to reload.
pub(super) fn todos_changed_response() -> Response {
    (StatusCode::NO_CONTENT, [(HX_TRIGGER, TODOS_CHANGED_EVENT)]).into_response()
}

/// Render the todo page with the todos that pass `filter`.
pub async fn get_todo_page(
    State(state): State<TodoState>,
    Query(filter): Query<TodoFilter>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let todos = get_todos(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve todos: {error}"))?;

    Ok(todo_view(&todos, &filter).into_response())
}

/// Render the todo list fragment with the todos that pass `filter`.
pub async fn get_todo_list_endpoint(
    State(state): State<TodoState>,
    Query(filter): Query<TodoFilter>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match get_todos(&connection) {
        Ok(todos) => todo_list_view(&todos, &filter).into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve todos: {error}");
            error.into_alert_response()
        }
    }
}

fn todo_view(todos: &[Todo], filter: &TodoFilter) -> Markup {
    let nav_bar = NavBar::new(Module::Todo).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            (new_todo_form())
            (filter_form(filter))

            button
                type="button"
                id="sort-todos"
                hx-post=(endpoints::SORT_TODOS)
                hx-swap="none"
                hx-target-error="#alert-container"
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Sort by priority"
            }

            (todo_list_view(todos, filter))
        }
    };

    base(Module::Todo.title(), &[], &content)
}

fn new_todo_form() -> Markup {
    html! {
        form
            id="new-todo"
            hx-post=(endpoints::TODOS_API)
            hx-swap="none"
            hx-target-error="#alert-container"
            hx-on--after-request="if (event.detail.successful) this.reset()"
            class="w-full max-w-md space-y-4"
        {
            div
            {
                label for="title" class=(FORM_LABEL_STYLE) { "Title" }

                input
                    id="title"
                    type="text"
                    name="title"
                    placeholder="What needs doing?"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="grid grid-cols-3 gap-2"
            {
                div
                {
                    label for="priority" class=(FORM_LABEL_STYLE) { "Priority" }

                    select id="priority" name="priority" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for priority in Priority::ALL {
                            option
                                value=(priority.as_str())
                                selected[priority == Priority::Medium]
                            {
                                (priority.label())
                            }
                        }
                    }
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select id="category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in TodoCategory::ALL {
                            option value=(category.as_str()) { (category.label()) }
                        }
                    }
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Due" }

                    input id="date" type="date" name="date" class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Todo" }
        }
    }
}

fn filter_form(filter: &TodoFilter) -> Markup {
    html! {
        form
            id=(TODO_FILTERS_ID)
            hx-get=(endpoints::TODOS_API)
            hx-trigger="change"
            hx-target={ "#" (TODO_LIST_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full max-w-md grid grid-cols-3 gap-2"
        {
            div
            {
                label for="filter-priority" class=(FORM_LABEL_STYLE) { "Priority" }

                select id="filter-priority" name="priority" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[filter.priority.is_none()] { "Any" }

                    @for priority in Priority::ALL {
                        option
                            value=(priority.as_str())
                            selected[filter.priority == Some(priority)]
                        {
                            (priority.label())
                        }
                    }
                }
            }

            div
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category" }

                select id="filter-category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[filter.category.is_none()] { "Any" }

                    @for category in TodoCategory::ALL {
                        option
                            value=(category.as_str())
                            selected[filter.category == Some(category)]
                        {
                            (category.label())
                        }
                    }
                }
            }

            div
            {
                label for="filter-status" class=(FORM_LABEL_STYLE) { "Status" }

                select id="filter-status" name="status" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for status in StatusFilter::ALL {
                        option value=(status.as_str()) selected[filter.status == status]
                        {
                            (status.label())
                        }
                    }
                }
            }
        }
    }
}

/// The todos that pass `filter`, in their stored order.
fn todo_list_view(todos: &[Todo], filter: &TodoFilter) -> Markup {
    let visible = filter.apply(todos);

    html! {
        ul
            id=(TODO_LIST_ID)
            hx-get=(endpoints::TODOS_API)
            hx-trigger={ (TODOS_CHANGED_EVENT) " from:body" }
            hx-include={ "#" (TODO_FILTERS_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full max-w-2xl space-y-2"
        {
            @if visible.is_empty() {
                li class="text-center text-gray-500 dark:text-gray-400" { "Nothing to do." }
            }

            @for todo in visible {
                (todo_item(todo))
            }
        }
    }
}

fn todo_item(todo: &Todo) -> Markup {
    let toggle_url = format_endpoint(endpoints::TOGGLE_TODO, todo.id);
    let delete_url = format_endpoint(endpoints::TODO, todo.id);
    let list_target = format!("#{TODO_LIST_ID}");
    let mut class = String::from("todo-item flex items-start gap-3 p-3 rounded bg-white dark:bg-gray-800");
    if todo.done {
        class.push_str(" done");
    }

    html! {
        li
            class=(class)
            data-todo-id=(todo.id)
        {
            input
                type="checkbox"
                checked[todo.done]
                aria-label="Done"
                hx-post=(toggle_url)
                hx-swap="none"
                hx-target-error="#alert-container"
                class="mt-1";

            div class="grow"
            {
                p class="todo-title font-medium" { (todo.title) }

                @if let Some(description) = &todo.description {
                    p class="todo-description text-sm text-gray-600 dark:text-gray-300" { (description) }
                }

                div class="flex gap-2 mt-1"
                {
                    span class={ "todo-priority " (BADGE_STYLE) } { (todo.priority.label()) }
                    span class={ "todo-category " (BADGE_STYLE) } { (todo.category.label()) }

                    @if let Some(date) = todo.date {
                        span class="todo-date text-xs text-gray-500 dark:text-gray-400" { (iso_date(date)) }
                    }
                }
            }

            (delete_button(&delete_url, &list_target))
        }
    }
}

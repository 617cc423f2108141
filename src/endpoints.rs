//! The endpoint URIs.
//!
//! For endpoints that take parameters, e.g., '/api/habits/{habit_id}', use [format_endpoint].

/// The root route which redirects to the habit tracker.
pub const ROOT: &str = "/";
/// The page for the habit tracker.
pub const HABITS_VIEW: &str = "/habits";
/// The page for the budget ledger.
pub const BUDGET_VIEW: &str = "/budget";
/// The page for the todo list.
pub const TODO_VIEW: &str = "/todo";
/// The page for the month calendar of todo due dates.
pub const CALENDAR_VIEW: &str = "/calendar";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a habit.
pub const HABITS_API: &str = "/api/habits";
/// The route to delete a habit.
pub const HABIT: &str = "/api/habits/{habit_id}";
/// The route to toggle whether a habit was completed on a day.
pub const HABIT_DAY: &str = "/api/habits/{habit_id}/toggle/{date}";
/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to list (with filters) and create todos.
pub const TODOS_API: &str = "/api/todos";
/// The route to delete a todo.
pub const TODO: &str = "/api/todos/{todo_id}";
/// The route to toggle whether a todo is done.
pub const TOGGLE_TODO: &str = "/api/todos/{todo_id}/toggle";
/// The route to sort the todos by priority.
pub const SORT_TODOS: &str = "/api/todos/sort";
/// The route to list the pending todos due on a day.
pub const CALENDAR_DAY: &str = "/api/calendar/{date}";

/// Fill the first `{name}` placeholder in `endpoint_path` with `value`.
///
/// Routes with two placeholders, such as [HABIT_DAY], are filled by calling
/// this twice. A path without a placeholder is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, value: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}

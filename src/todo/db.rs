//! Storage operations for todos.

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    record_id::next_record_id,
    storage::{StorageKey, load, save},
    todo::{NewTodo, Todo, TodoId, filter::sort_by_priority},
};

/// Retrieve all todos in their stored order.
pub fn get_todos(connection: &Connection) -> Result<Vec<Todo>, Error> {
    load(StorageKey::Todos, connection)
}

/// Store a todo created at `now` and return it with its generated ID.
pub fn create_todo(
    new_todo: NewTodo,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<Todo, Error> {
    let mut todos = get_todos(connection)?;

    let id = next_record_id(todos.iter().map(|todo| todo.id), now);
    let todo = new_todo.into_todo(id);
    todos.push(todo.clone());

    save(StorageKey::Todos, &todos, connection)?;

    Ok(todo)
}

/// Flip whether a todo is done.
///
/// Returns whether the todo is done after the toggle, or
/// [Error::ToggleMissingTodo] if there is no todo with `todo_id`.
pub fn toggle_todo(todo_id: TodoId, connection: &Connection) -> Result<bool, Error> {
    let mut todos = get_todos(connection)?;

    let todo = todos
        .iter_mut()
        .find(|todo| todo.id == todo_id)
        .ok_or(Error::ToggleMissingTodo)?;
    todo.done = !todo.done;
    let is_done = todo.done;

    save(StorageKey::Todos, &todos, connection)?;

    Ok(is_done)
}

/// Delete a todo by ID. Returns an error if the todo doesn't exist.
pub fn delete_todo(todo_id: TodoId, connection: &Connection) -> Result<(), Error> {
    let mut todos = get_todos(connection)?;
    let count_before = todos.len();

    todos.retain(|todo| todo.id != todo_id);

    if todos.len() == count_before {
        return Err(Error::DeleteMissingTodo);
    }

    save(StorageKey::Todos, &todos, connection)
}

/// Reorder the stored todos from the highest to the lowest priority.
pub fn sort_todos_by_priority(connection: &Connection) -> Result<(), Error> {
    let mut todos = get_todos(connection)?;

    sort_by_priority(&mut todos);

    save(StorageKey::Todos, &todos, connection)
}

//! The todo list: tasks with a priority, a category and an optional due
//! date, which can be filtered and sorted by priority.

mod create;
mod db;
mod delete;
mod domain;
mod filter;
mod list;
mod sort;
mod toggle;

pub use create::create_todo_endpoint;
pub use db::{create_todo, delete_todo, get_todos, sort_todos_by_priority, toggle_todo};
pub use delete::delete_todo_endpoint;
pub use domain::{NewTodo, Priority, Todo, TodoCategory, TodoId, TodoTitle};
pub use list::{get_todo_list_endpoint, get_todo_page};
pub use sort::sort_todos_endpoint;
pub use toggle::toggle_todo_endpoint;

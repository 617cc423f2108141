//! Habit tracking: a month grid per habit showing the days it was done and
//! the share of the month on which it was done.

mod create;
mod db;
mod delete;
mod domain;
mod grid;
mod list;
mod toggle;

pub use create::create_habit_endpoint;
pub use db::{create_habit, delete_habit, get_habits, toggle_habit_date};
pub use delete::delete_habit_endpoint;
pub use domain::{Habit, HabitId, HabitName};
pub use list::get_habits_page;
pub use toggle::toggle_habit_endpoint;

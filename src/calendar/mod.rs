//! The month calendar: a month grid that can be moved back and forward,
//! showing how many pending todos are due on each day.

mod cursor;
mod day;
mod grid;
mod page;

pub use day::get_calendar_day_endpoint;
pub use page::get_calendar_page;

//! Builds the month grid of the calendar page from the stored todos.

use std::collections::BTreeMap;

use time::Date;

use crate::{
    calendar::cursor::MonthCursor,
    date::{dates_in_month, first_weekday},
    todo::Todo,
};

/// A day of the calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    /// The number of todos due on this day that are not done.
    pub pending_count: usize,
    pub is_today: bool,
}

/// A cell of the calendar grid, not counting the weekday header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Fills the days before the first of the month in the first week.
    Placeholder,
    Day(CalendarDay),
}

/// The month shown by the calendar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub cursor: MonthCursor,
    /// Leading placeholders followed by one cell per day of the month.
    pub cells: Vec<CalendarCell>,
}

/// The todos due on `date` that are not done, in stored order.
pub fn pending_todos_on(todos: &[Todo], date: Date) -> Vec<&Todo> {
    todos
        .iter()
        .filter(|todo| !todo.done && todo.date == Some(date))
        .collect()
}

/// Build the grid for the month at `cursor`, annotating each day with the
/// number of pending todos due that day.
pub fn calendar_month_grid(cursor: MonthCursor, todos: &[Todo], today: Date) -> CalendarGrid {
    let first_day = cursor.first_day();

    let mut pending_counts: BTreeMap<Date, usize> = BTreeMap::new();
    for date in todos.iter().filter(|todo| !todo.done).filter_map(|todo| todo.date) {
        *pending_counts.entry(date).or_default() += 1;
    }

    let placeholders = (0..first_weekday(first_day)).map(|_| CalendarCell::Placeholder);
    let days = dates_in_month(first_day).map(|date| {
        CalendarCell::Day(CalendarDay {
            date,
            pending_count: pending_counts.get(&date).copied().unwrap_or_default(),
            is_today: date == today,
        })
    });

    CalendarGrid {
        cursor,
        cells: placeholders.chain(days).collect(),
    }
}

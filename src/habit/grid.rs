//! Builds the month grid shown for each habit and computes the habit's progress.
//!
//! The grid always shows the month that contains today. It starts with one
//! placeholder cell per weekday before the first of the month, so that day 1
//! lines up under the right weekday header, followed by one cell per day.

use std::collections::BTreeSet;

use time::{Date, Month};

use crate::date::{dates_in_month, days_in_month, first_weekday, iso_date};

/// Whether a habit was done on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// The habit was done on this day.
    Completed,
    /// The day has passed and the habit was not done.
    Missed,
    /// Today or a future day on which the habit has not been done (yet).
    Pending,
}

/// A dated cell in the habit grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub status: DayStatus,
    /// Set independently of `status`, so today can also be completed.
    pub is_today: bool,
}

impl DayCell {
    /// The key that identifies the cell's day, e.g. "2024-06-01".
    pub fn key(&self) -> String {
        iso_date(self.date)
    }
}

/// One square of the habit grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitCell {
    /// Padding before the first day of the month, it has no date and cannot be toggled.
    Placeholder,
    Day(DayCell),
}

impl HabitCell {
    pub fn date(&self) -> Option<Date> {
        match self {
            HabitCell::Placeholder => None,
            HabitCell::Day(day) => Some(day.date),
        }
    }
}

/// The month grid for one habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitGrid {
    pub year: i32,
    pub month: Month,
    pub days_in_month: u8,
    pub first_weekday: u8,
    /// `first_weekday` placeholders followed by `days_in_month` days.
    pub cells: Vec<HabitCell>,
}

/// Build the grid for the month containing `today`.
pub fn habit_month_grid(today: Date, completed_dates: &BTreeSet<Date>) -> HabitGrid {
    let first_weekday = first_weekday(today);
    let days_in_month = days_in_month(today.year(), today.month());

    let placeholders = (0..first_weekday).map(|_| HabitCell::Placeholder);
    let days = dates_in_month(today).map(|date| {
        let status = if completed_dates.contains(&date) {
            DayStatus::Completed
        } else if date < today {
            DayStatus::Missed
        } else {
            DayStatus::Pending
        };

        HabitCell::Day(DayCell {
            date,
            status,
            is_today: date == today,
        })
    });

    HabitGrid {
        year: today.year(),
        month: today.month(),
        days_in_month,
        first_weekday,
        cells: placeholders.chain(days).collect(),
    }
}

/// The percentage of the month's days on which the habit was done.
///
/// This divides by the number of days in the month rather than the number
/// of days elapsed so far, so a habit created mid-month cannot reach 100%
/// until the end of the month. Every completed date counts, including dates
/// outside the current month, and the result is capped at 100.
pub fn habit_progress(completed_dates: &BTreeSet<Date>, days_in_month: u8) -> u8 {
    if days_in_month == 0 {
        return 0;
    }

    let progress = (100.0 * completed_dates.len() as f64 / f64::from(days_in_month)).round();

    progress.min(100.0) as u8
}

//! The month that the calendar page is showing.

use serde::Deserialize;
use time::{Date, Month};

use crate::Error;

/// The query string of the calendar page, e.g. `?year=2024&month=6`.
///
/// The calendar shows the current month unless both fields are given.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CalendarQuery {
    /// The year to show.
    #[serde(default)]
    pub year: Option<i32>,
    /// The month to show, 1 for January through 12 for December.
    #[serde(default)]
    pub month: Option<u8>,
}

/// A year and month, independent of today's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: Month,
}

impl MonthCursor {
    /// Create a cursor for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidDate] if `month` is not in 1-12 or `year` is
    /// outside the supported range of years.
    pub fn new(year: i32, month: u8) -> Result<Self, Error> {
        let invalid_date = || Error::InvalidDate(format!("{year}-{month:02}"));
        let month = Month::try_from(month).map_err(|_| invalid_date())?;
        Date::from_calendar_date(year, month, 1).map_err(|_| invalid_date())?;

        Ok(Self { year, month })
    }

    /// The cursor for the month that `date` is in.
    pub fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month requested by `query`, or the month containing `today` if
    /// the query does not name both a year and a month.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidDate] if the query names a month that does not exist.
    pub fn from_query(query: &CalendarQuery, today: Date) -> Result<Self, Error> {
        match (query.year, query.month) {
            (Some(year), Some(month)) => Self::new(year, month),
            _ => Ok(Self::containing(today)),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> Month {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(self) -> Date {
        // `new` and `containing` only create cursors for representable months.
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// The following month, wrapping into the next year after December.
    ///
    /// Returns `None` past the last supported year.
    pub fn next(self) -> Option<Self> {
        match self.month {
            Month::December => Self::new(self.year.checked_add(1)?, 1).ok(),
            month => Some(Self {
                year: self.year,
                month: month.next(),
            }),
        }
    }

    /// The preceding month, wrapping into the previous year before January.
    ///
    /// Returns `None` before the first supported year.
    pub fn previous(self) -> Option<Self> {
        match self.month {
            Month::January => Self::new(self.year.checked_sub(1)?, 12).ok(),
            month => Some(Self {
                year: self.year,
                month: month.previous(),
            }),
        }
    }

    /// The query string that selects this month on the calendar page.
    pub fn query_string(self) -> String {
        format!("year={}&month={}", self.year, u8::from(self.month))
    }
}

impl std::fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

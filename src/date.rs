//! Calendar arithmetic shared by the habit tracker and the month calendar.

use std::collections::BTreeSet;

use time::{Date, Duration, Month, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const ISO_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Short weekday names for the header row of a month grid, starting on Sunday.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The number of days (28-31) in `month` of `year`.
pub fn days_in_month(year: i32, month: Month) -> u8 {
    month.length(year)
}

/// The first day of the month that `date` is in.
pub fn first_of_month(date: Date) -> Date {
    // Day 1 exists in every month.
    date.replace_day(1).unwrap_or(date)
}

/// The weekday of the first day of the month that `date` is in,
/// where 0 is Sunday and 6 is Saturday.
pub fn first_weekday(date: Date) -> u8 {
    first_of_month(date).weekday().number_days_from_sunday()
}

/// Every date in the month that `date` is in, in order.
pub fn dates_in_month(date: Date) -> impl Iterator<Item = Date> {
    let first = first_of_month(date);
    let day_count = days_in_month(first.year(), first.month());

    (0..i64::from(day_count)).map(move |offset| first + Duration::days(offset))
}

/// Format `date` as `YYYY-MM-DD`, the format [parse_iso_date] reads.
pub fn iso_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `text` is not a valid calendar date.
pub fn parse_iso_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), ISO_DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// (De)serialize a set of dates as an array of `YYYY-MM-DD` strings.
pub mod iso_date_set {
    use super::*;

    use serde::{Deserialize, Deserializer, Serializer, de, ser::SerializeSeq};

    pub fn serialize<S: Serializer>(dates: &BTreeSet<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        let mut sequence = serializer.serialize_seq(Some(dates.len()))?;
        for date in dates {
            sequence.serialize_element(&iso_date(*date))?;
        }
        sequence.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<Date>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|text| parse_iso_date(text).map_err(de::Error::custom))
            .collect()
    }
}

/// (De)serialize an optional date as a `YYYY-MM-DD` string or null.
pub mod optional_iso_date {
    use super::*;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&iso_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.trim().is_empty() => {
                parse_iso_date(&text).map(Some).map_err(de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod date_tests {
    use time::{Date, Month, macros::date};

    use crate::{
        Error,
        date::{dates_in_month, days_in_month, first_of_month, first_weekday, iso_date, parse_iso_date},
    };

    #[test]
    fn days_in_month_handles_month_lengths() {
        assert_eq!(days_in_month(2024, Month::January), 31);
        assert_eq!(days_in_month(2024, Month::April), 30);
        assert_eq!(days_in_month(2024, Month::June), 30);
        assert_eq!(days_in_month(2024, Month::December), 31);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29);
        assert_eq!(days_in_month(1900, Month::February), 28);
    }

    #[test]
    fn first_weekday_counts_from_sunday() {
        // 1 June 2024 was a Saturday.
        assert_eq!(first_weekday(date!(2024 - 06 - 15)), 6);
        // 1 September 2024 was a Sunday.
        assert_eq!(first_weekday(date!(2024 - 09 - 30)), 0);
        // 1 October 2026 is a Thursday.
        assert_eq!(first_weekday(date!(2026 - 10 - 01)), 4);
    }

    #[test]
    fn first_of_month_keeps_year_and_month() {
        assert_eq!(first_of_month(date!(2024 - 02 - 29)), date!(2024 - 02 - 01));
        assert_eq!(first_of_month(date!(2024 - 02 - 01)), date!(2024 - 02 - 01));
    }

    #[test]
    fn dates_in_month_covers_whole_month() {
        let dates = dates_in_month(date!(2024 - 02 - 10)).collect::<Vec<_>>();

        assert_eq!(dates.len(), 29);
        assert_eq!(dates.first(), Some(&date!(2024 - 02 - 01)));
        assert_eq!(dates.last(), Some(&date!(2024 - 02 - 29)));
    }

    #[test]
    fn iso_date_is_zero_padded() {
        assert_eq!(iso_date(date!(2024 - 06 - 01)), "2024-06-01");
        assert_eq!(iso_date(date!(2024 - 12 - 31)), "2024-12-31");
    }

    #[test]
    fn iso_date_round_trips_through_parse_iso_date() {
        for date in [
            date!(2024 - 06 - 01),
            date!(0000 - 01 - 01),
            Date::from_calendar_date(-1, Month::January, 5).unwrap(),
            date!(9999 - 12 - 31),
        ] {
            let text = iso_date(date);

            assert_eq!(parse_iso_date(&text), Ok(date), "could not read back {text:?}");
        }
    }

    #[test]
    fn negative_years_keep_four_digits() {
        let date = Date::from_calendar_date(-1, Month::January, 5).unwrap();

        assert_eq!(iso_date(date), "-0001-01-05");
    }

    #[test]
    fn parse_iso_date_accepts_valid_dates() {
        assert_eq!(parse_iso_date("2024-06-01"), Ok(date!(2024 - 06 - 01)));
    }

    #[test]
    fn parse_iso_date_rejects_invalid_dates() {
        for text in ["", "2024-6-1", "2023-02-29", "2024-13-01", "yesterday"] {
            assert_eq!(
                parse_iso_date(text),
                Err(Error::InvalidDate(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }
}

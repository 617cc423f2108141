//! Core habit domain types.

use std::{collections::BTreeSet, fmt::Display};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, date::iso_date_set, record_id::RecordId};

/// A validated, non-empty habit name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitName(String);

impl HabitName {
    /// Create a habit name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyHabitName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyHabitName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a habit name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    #[cfg(test)]
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for HabitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for HabitName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a habit, its creation timestamp.
pub type HabitId = RecordId;

/// Something the user wants to do every day, e.g. "Read for 20 minutes".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: HabitName,
    /// The days on which the habit was done.
    #[serde(with = "iso_date_set")]
    pub completed_dates: BTreeSet<Date>,
}

impl Habit {
    /// A habit that has not been completed on any day yet.
    pub fn new(id: HabitId, name: HabitName) -> Self {
        Self {
            id,
            name,
            completed_dates: BTreeSet::new(),
        }
    }

    /// Mark the habit as done on `date` if it was not, otherwise unmark it.
    ///
    /// Returns whether the habit is completed on `date` after the toggle.
    pub fn toggle(&mut self, date: Date) -> bool {
        if self.completed_dates.remove(&date) {
            false
        } else {
            self.completed_dates.insert(date);
            true
        }
    }
}

/// Form data for creating a habit.
#[derive(Debug, Serialize, Deserialize)]
pub struct HabitFormData {
    pub name: String,
}

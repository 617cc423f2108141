//! Storage operations for habits.

use rusqlite::Connection;
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    habit::{Habit, HabitId, HabitName},
    record_id::next_record_id,
    storage::{StorageKey, load, save},
};

/// Retrieve all habits in the order they were created.
pub fn get_habits(connection: &Connection) -> Result<Vec<Habit>, Error> {
    load(StorageKey::Habits, connection)
}

/// Create a habit that was created at `now` and return it with its generated ID.
pub fn create_habit(
    name: HabitName,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<Habit, Error> {
    let mut habits = get_habits(connection)?;

    let id = next_record_id(habits.iter().map(|habit| habit.id), now);
    let habit = Habit::new(id, name);
    habits.push(habit.clone());

    save(StorageKey::Habits, &habits, connection)?;

    Ok(habit)
}

/// Flip whether the habit was done on `date`.
///
/// Returns whether the habit is completed on `date` after the toggle, or
/// [Error::ToggleMissingHabit] if there is no habit with `habit_id`.
pub fn toggle_habit_date(
    habit_id: HabitId,
    date: Date,
    connection: &Connection,
) -> Result<bool, Error> {
    let mut habits = get_habits(connection)?;

    let is_completed = habits
        .iter_mut()
        .find(|habit| habit.id == habit_id)
        .ok_or(Error::ToggleMissingHabit)?
        .toggle(date);

    save(StorageKey::Habits, &habits, connection)?;

    Ok(is_completed)
}

/// Delete a habit by ID. Returns an error if the habit doesn't exist.
pub fn delete_habit(habit_id: HabitId, connection: &Connection) -> Result<(), Error> {
    let mut habits = get_habits(connection)?;
    let count_before = habits.len();

    habits.retain(|habit| habit.id != habit_id);

    if habits.len() == count_before {
        return Err(Error::DeleteMissingHabit);
    }

    save(StorageKey::Habits, &habits, connection)
}

#[cfg(test)]
mod habit_db_tests {
    use rusqlite::Connection;
    use time::macros::{date, datetime};

    use crate::{
        Error,
        date::parse_iso_date,
        habit::{HabitName, create_habit, delete_habit, get_habits, toggle_habit_date},
        storage::initialize,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    #[test]
    fn get_habits_is_empty_for_new_database() {
        let connection = get_test_connection();

        let habits = get_habits(&connection).unwrap();

        assert!(habits.is_empty());
    }

    #[test]
    fn create_habit_persists_habit() {
        let connection = get_test_connection();
        let now = datetime!(2024-06-01 12:00:00.123 UTC);

        let habit = create_habit(HabitName::new_unchecked("Read"), now, &connection).unwrap();

        assert_eq!(habit.id, 1_717_243_200_123);
        assert!(habit.completed_dates.is_empty());
        assert_eq!(get_habits(&connection).unwrap(), vec![habit]);
    }

    #[test]
    fn habits_created_in_same_millisecond_get_unique_ids() {
        let connection = get_test_connection();
        let now = datetime!(2024-06-01 12:00:00 UTC);

        let first = create_habit(HabitName::new_unchecked("Read"), now, &connection).unwrap();
        let second = create_habit(HabitName::new_unchecked("Run"), now, &connection).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(get_habits(&connection).unwrap(), vec![first, second]);
    }

    #[test]
    fn habits_with_negative_year_dates_can_be_read_back() {
        let connection = get_test_connection();
        let habit = create_habit(
            HabitName::new_unchecked("Read"),
            datetime!(2024-06-01 12:00:00 UTC),
            &connection,
        )
        .unwrap();
        let date = parse_iso_date("-0001-01-05").unwrap();

        assert_eq!(toggle_habit_date(habit.id, date, &connection), Ok(true));

        let stored = get_habits(&connection).expect("Could not read habits back");
        assert!(stored[0].completed_dates.contains(&date));
    }

    #[test]
    fn toggle_habit_date_adds_then_removes_date() {
        let connection = get_test_connection();
        let habit = create_habit(
            HabitName::new_unchecked("Read"),
            datetime!(2024-06-01 12:00:00 UTC),
            &connection,
        )
        .unwrap();

        assert_eq!(
            toggle_habit_date(habit.id, date!(2024 - 06 - 03), &connection),
            Ok(true)
        );
        let stored = get_habits(&connection).unwrap();
        assert!(stored[0].completed_dates.contains(&date!(2024 - 06 - 03)));

        assert_eq!(
            toggle_habit_date(habit.id, date!(2024 - 06 - 03), &connection),
            Ok(false)
        );
        let stored = get_habits(&connection).unwrap();
        assert!(stored[0].completed_dates.is_empty());
    }

    #[test]
    fn toggle_habit_date_fails_for_missing_habit() {
        let connection = get_test_connection();

        let result = toggle_habit_date(42, date!(2024 - 06 - 03), &connection);

        assert_eq!(result, Err(Error::ToggleMissingHabit));
    }

    #[test]
    fn delete_habit_removes_exactly_one_habit() {
        let connection = get_test_connection();
        let now = datetime!(2024-06-01 12:00:00 UTC);
        let first = create_habit(HabitName::new_unchecked("Read"), now, &connection).unwrap();
        let second = create_habit(HabitName::new_unchecked("Run"), now, &connection).unwrap();
        let third = create_habit(HabitName::new_unchecked("Sleep"), now, &connection).unwrap();

        delete_habit(second.id, &connection).unwrap();

        assert_eq!(get_habits(&connection).unwrap(), vec![first, third]);
    }

    #[test]
    fn delete_habit_fails_for_missing_habit() {
        let connection = get_test_connection();

        let result = delete_habit(42, &connection);

        assert_eq!(result, Err(Error::DeleteMissingHabit));
    }
}

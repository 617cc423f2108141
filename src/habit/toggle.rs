//! Endpoint for marking a habit as done, or not done, on a day.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    date::parse_iso_date,
    habit::{
        HabitId,
        db::toggle_habit_date,
        list::{HabitsState, habit_list_response},
    },
};

/// Flip the completion of a habit on the day `date` (`YYYY-MM-DD`) and
/// re-render the habit list.
pub async fn toggle_habit_endpoint(
    Path((habit_id, date)): Path<(HabitId, String)>,
    State(state): State<HabitsState>,
) -> Response {
    let date = match parse_iso_date(&date) {
        Ok(date) => date,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match toggle_habit_date(habit_id, date, &connection) {
        Ok(_) => habit_list_response(&connection, &state.local_timezone),
        Err(Error::ToggleMissingHabit) => Error::ToggleMissingHabit.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while toggling habit {habit_id} on {date}: {error}"
            );
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod toggle_habit_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use scraper::Selector;
    use time::{OffsetDateTime, macros::date};

    use crate::{
        habit::{HabitName, create_habit, get_habits, list::HabitsState, toggle_habit_endpoint},
        storage::initialize,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    fn get_test_state() -> HabitsState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");

        HabitsState {
            db_connection: Arc::new(Mutex::new(connection)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn toggle_marks_day_completed() {
        let state = get_test_state();
        let today = OffsetDateTime::now_utc().date();
        let habit = create_habit(
            HabitName::new_unchecked("Read"),
            OffsetDateTime::now_utc(),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = toggle_habit_endpoint(
            Path((habit.id, crate::date::iso_date(today))),
            State(state.clone()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let completed = html
            .select(&Selector::parse(".habit-day.completed.today").unwrap())
            .count();
        assert_eq!(completed, 1);

        let habits = get_habits(&state.db_connection.lock().unwrap()).unwrap();
        assert!(habits[0].completed_dates.contains(&today));
    }

    #[tokio::test]
    async fn toggle_twice_restores_dates() {
        let state = get_test_state();
        let habit = create_habit(
            HabitName::new_unchecked("Read"),
            OffsetDateTime::now_utc(),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        for _ in 0..2 {
            toggle_habit_endpoint(
                Path((habit.id, "2024-06-01".to_owned())),
                State(state.clone()),
            )
            .await;
        }

        let habits = get_habits(&state.db_connection.lock().unwrap()).unwrap();
        assert!(!habits[0].completed_dates.contains(&date!(2024 - 06 - 01)));
        assert!(habits[0].completed_dates.is_empty());
    }

    #[tokio::test]
    async fn toggle_missing_habit_returns_not_found_alert() {
        let state = get_test_state();

        let response =
            toggle_habit_endpoint(Path((42, "2024-06-01".to_owned())), State(state)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(
            html.select(&Selector::parse("[role=alert]").unwrap())
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn invalid_date_returns_bad_request() {
        let state = get_test_state();
        let habit = create_habit(
            HabitName::new_unchecked("Read"),
            OffsetDateTime::now_utc(),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response =
            toggle_habit_endpoint(Path((habit.id, "2024-02-30".to_owned())), State(state)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! Habit deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    habit::{
        HabitId,
        db::delete_habit,
        list::{HabitsState, habit_list_response},
    },
};

/// Delete a habit and all of its completion history, then re-render the habit list.
pub async fn delete_habit_endpoint(
    Path(habit_id): Path<HabitId>,
    State(state): State<HabitsState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_habit(habit_id, &connection) {
        Ok(_) => habit_list_response(&connection, &state.local_timezone),
        Err(Error::DeleteMissingHabit) => Error::DeleteMissingHabit.into_alert_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while deleting habit {habit_id}: {error}");
            error.into_alert_response()
        }
    }
}

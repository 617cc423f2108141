//! Habit creation endpoint.

use axum::{Form, extract::State, response::Response};
use time::OffsetDateTime;

use crate::{
    Error,
    habit::{
        HabitName, create_habit,
        domain::HabitFormData,
        list::{HabitsState, habit_list_response},
    },
};

/// Handle the new habit form.
///
/// A blank name does not create anything, the unchanged habit list is
/// rendered instead.
pub async fn create_habit_endpoint(
    State(state): State<HabitsState>,
    Form(form): Form<HabitFormData>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match HabitName::new(&form.name) {
        Ok(name) => {
            if let Err(error) = create_habit(name, OffsetDateTime::now_utc(), &connection) {
                tracing::error!("An unexpected error occurred while creating a habit: {error}");
                return error.into_alert_response();
            }
        }
        Err(error) => tracing::debug!("Ignoring new habit: {error}"),
    }

    habit_list_response(&connection, &state.local_timezone)
}

//! Daybook is a personal productivity dashboard.
//!
//! It bundles four small trackers behind one navigation bar:
//! - a habit calendar with per-day completion toggling and monthly progress,
//! - a budget ledger with totals, a running balance and an expenses pie chart,
//! - a todo list with priority, category and status filters,
//! - a month calendar showing how many pending todos are due on each day.
//!
//! This library provides a web server that directly serves HTML pages and
//! htmx fragments. All state is kept in a local key-value store.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod budget;
mod calendar;
mod date;
mod endpoints;
mod error_page;
mod habit;
mod html;
mod logging;
mod navigation;
mod record_id;
mod routing;
mod storage;
mod timezone;
mod todo;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use budget::{BudgetCategory, NewTransaction, TransactionType, create_transaction};
pub use habit::{HabitName, create_habit, toggle_habit_date};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use storage::initialize as initialize_db;
pub use timezone::get_local_offset;
pub use todo::{NewTodo, Priority, TodoCategory, TodoTitle, create_todo};

use crate::{alert::Alert, error_page::ErrorPage};

/// Wait for Ctrl+C or, on Unix, SIGTERM, then give in-flight requests one
/// second to finish before the server behind `handle` stops.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let signal_name = shutdown_signal().await;
    tracing::info!("Shutting down after {signal_name}.");
    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// Resolve with the name of the first shutdown signal received.
async fn shutdown_signal() -> &'static str {
    let interrupt = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Cannot listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Cannot listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "Ctrl+C",
        _ = terminate => "SIGTERM",
    }
}

/// Everything that can go wrong while serving a request.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as a habit name.
    #[error("Habit name cannot be empty")]
    EmptyHabitName,

    /// An empty string was used as a todo title.
    #[error("Todo title cannot be empty")]
    EmptyTodoTitle,

    /// The transaction amount was empty, not a number, or not positive.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A string could not be parsed as a `YYYY-MM-DD` calendar date, or a
    /// year/month pair does not describe a valid month.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// A SQL query that should return a row returned none.
    #[error("no matching row in the database")]
    NotFound,

    /// Any other SQLite failure.
    #[error("SQLite error: {0}")]
    SqlError(rusqlite::Error),

    /// A value in the key-value store could not be decoded.
    ///
    /// The first string is the storage key, the second the decoding error.
    #[error("the data stored under \"{0}\" is corrupt: {1}")]
    CorruptData(String, String),

    /// A value could not be encoded as JSON before saving it.
    #[error("could not encode value as JSON: {0}")]
    JSONSerializationError(String),

    /// The configured timezone name is not in the timezone database.
    #[error("unknown timezone \"{0}\"")]
    InvalidTimezoneError(String),

    /// The connection mutex was poisoned by a panicking handler.
    #[error("the database connection lock is poisoned")]
    DatabaseLockError,

    /// No habit has the id given to toggle a day on.
    #[error("no habit with that id to toggle")]
    ToggleMissingHabit,

    /// No habit has the id given to delete.
    #[error("no habit with that id to delete")]
    DeleteMissingHabit,

    /// No transaction has the id given to delete.
    #[error("no transaction with that id to delete")]
    DeleteMissingTransaction,

    /// No todo has the id given to toggle.
    #[error("no todo with that id to toggle")]
    ToggleMissingTodo,

    /// No todo has the id given to delete.
    #[error("no todo with that id to delete")]
    DeleteMissingTodo,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("SQLite returned an error: {error}");
                Error::SqlError(error)
            }
        }
    }
}

/// What to tell the user when the configured timezone is unknown.
fn timezone_fix(timezone: &str) -> String {
    format!(
        "\"{timezone}\" is not a timezone Daybook knows. Restart the server with a \
        canonical timezone name such as \"Europe/Warsaw\"."
    )
}

/// The alert for a record that was deleted or never existed.
fn missing_record_alert(action: &str, record: &str) -> Alert {
    Alert {
        message: format!("Could not {action} {record}"),
        details: format!(
            "This {record} no longer exists. Reload the page to see the current list."
        ),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::InvalidDate(date) => ErrorPage::bad_request(
                "That date does not exist.",
                &format!("\"{date}\" is not a valid date or month. Pick one from the calendar."),
            )
            .into_response(),
            Error::InvalidTimezoneError(timezone) => ErrorPage::internal_server_error(
                "The server's timezone is misconfigured.",
                &timezone_fix(&timezone),
            )
            .into_response(),
            Error::CorruptData(key, _) => ErrorPage::internal_server_error(
                "Your saved data could not be read.",
                &format!("The stored {key} are damaged, see the server logs for the details."),
            )
            .into_response(),
            Error::DatabaseLockError => ErrorPage::default().into_response(),
            error => {
                tracing::error!("Rendering error page for: {error}");
                ErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for the `#alert-container` of the current page.
    fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid date".to_owned(),
                    details: format!("\"{date}\" is not a valid date."),
                },
            ),
            Error::ToggleMissingHabit => (
                StatusCode::NOT_FOUND,
                missing_record_alert("update", "habit"),
            ),
            Error::DeleteMissingHabit => (
                StatusCode::NOT_FOUND,
                missing_record_alert("delete", "habit"),
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                missing_record_alert("delete", "transaction"),
            ),
            Error::ToggleMissingTodo => (
                StatusCode::NOT_FOUND,
                missing_record_alert("update", "todo"),
            ),
            Error::DeleteMissingTodo => (
                StatusCode::NOT_FOUND,
                missing_record_alert("delete", "todo"),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Timezone misconfigured".to_owned(),
                    details: timezone_fix(&timezone),
                },
            ),
            Error::CorruptData(key, _) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Corrupt data".to_owned(),
                    details: format!("The stored {key} could not be read."),
                },
            ),
            error => {
                tracing::error!("Rendering alert for: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert {
                        message: "Something went wrong".to_owned(),
                        details: "Try again, and check the server logs if it keeps happening."
                            .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

//! The calendar page: a month grid with the number of pending todos due on each day.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    calendar::{
        cursor::{CalendarQuery, MonthCursor},
        grid::{CalendarCell, CalendarDay, CalendarGrid, calendar_month_grid},
    },
    date::{WEEKDAY_HEADERS, iso_date},
    endpoints::{self, format_endpoint},
    html::{BUTTON_SECONDARY_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::{Module, NavBar},
    timezone::local_today,
    todo::get_todos,
};

/// The id of the element that the todos of the selected day are loaded into.
pub(super) const DAY_TODOS_ID: &str = "calendar-day-todos";

/// The state needed by the calendar page and endpoints.
#[derive(Debug, Clone)]
pub struct CalendarState {
    /// The database connection for reading todos.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Warsaw".
    pub local_timezone: String,
}

impl FromRef<AppState> for CalendarState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the calendar page for the month in the query string, or the
/// current month if none is given.
pub async fn get_calendar_page(
    State(state): State<CalendarState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let cursor = MonthCursor::from_query(&query, today)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let todos = get_todos(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve todos: {error}"))?;

    let grid = calendar_month_grid(cursor, &todos, today);

    Ok(calendar_view(&grid).into_response())
}

fn calendar_view(grid: &CalendarGrid) -> Markup {
    let nav_bar = NavBar::new(Module::Calendar).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-3xl"
            {
                (month_navigation(grid.cursor))
                (month_grid(grid))
            }

            div id=(DAY_TODOS_ID) class="w-full max-w-3xl"
            {
                p class="text-center text-gray-500 dark:text-gray-400"
                {
                    "Select a day with pending todos to see them here."
                }
            }
        }
    };

    base(Module::Calendar.title(), &[], &content)
}

fn month_link(cursor: Option<MonthCursor>, id: &str, text: &str) -> Markup {
    html! {
        @if let Some(cursor) = cursor {
            a
                id=(id)
                href={ (endpoints::CALENDAR_VIEW) "?" (cursor.query_string()) }
                class=(BUTTON_SECONDARY_STYLE)
            {
                (text)
            }
        } @else {
            span {}
        }
    }
}

fn month_navigation(cursor: MonthCursor) -> Markup {
    html! {
        div class="flex items-center justify-between mb-4"
        {
            (month_link(cursor.previous(), "previous-month", "‹ Previous"))

            h2 id="calendar-month" class="text-xl font-semibold" { (cursor) }

            (month_link(cursor.next(), "next-month", "Next ›"))
        }
    }
}

fn month_grid(grid: &CalendarGrid) -> Markup {
    html! {
        div class="calendar-grid grid grid-cols-7 gap-1 text-center"
        {
            @for weekday in WEEKDAY_HEADERS {
                div class="weekday-header font-medium text-gray-500 dark:text-gray-400"
                {
                    (weekday)
                }
            }

            @for cell in &grid.cells {
                @match cell {
                    CalendarCell::Placeholder => {
                        div class="calendar-day placeholder" {}
                    }
                    CalendarCell::Day(day) => {
                        (day_cell(day))
                    }
                }
            }
        }
    }
}

fn day_cell(day: &CalendarDay) -> Markup {
    let key = iso_date(day.date);
    let mut class = "calendar-day h-16 p-1 rounded bg-white dark:bg-gray-800".to_owned();
    if day.pending_count > 0 {
        class.push_str(" has-todos");
    }
    if day.is_today {
        class.push_str(" today");
    }

    html! {
        div class=(class) data-date=(key)
        {
            span class="day-number block text-sm" { (day.date.day()) }

            @if day.pending_count > 0 {
                button
                    type="button"
                    class="pending-count px-2 rounded-full text-xs text-white bg-blue-600"
                    hx-get=(format_endpoint(endpoints::CALENDAR_DAY, &key))
                    hx-target={ "#" (DAY_TODOS_ID) }
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                {
                    (day.pending_count)
                }
            }
        }
    }
}

//! The habit tracker page and the habit list fragment that every habit endpoint responds with.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error,
    date::WEEKDAY_HEADERS,
    endpoints::{self, format_endpoint},
    habit::{
        Habit, get_habits,
        grid::{DayCell, DayStatus, HabitCell, habit_month_grid, habit_progress},
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
        delete_button,
    },
    navigation::{Module, NavBar},
    timezone::local_today,
};

/// The id of the element that holds the habit cards, the target of every habit endpoint.
pub(super) const HABIT_LIST_ID: &str = "habit-list";

/// The state needed by the habit tracker page and endpoints.
#[derive(Debug, Clone)]
pub struct HabitsState {
    /// The database connection for managing habits.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Warsaw".
    pub local_timezone: String,
}

impl FromRef<AppState> for HabitsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the habit tracker page.
pub async fn get_habits_page(State(state): State<HabitsState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let habits = get_habits(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve habits: {error}"))?;

    Ok(habits_view(&habits, today).into_response())
}

/// Load the habits and render the habit list fragment, or an alert if that fails.
pub(super) fn habit_list_response(connection: &Connection, local_timezone: &str) -> Response {
    let today = match local_today(local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    match get_habits(connection) {
        Ok(habits) => habit_list_view(&habits, today).into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve habits: {error}");
            error.into_alert_response()
        }
    }
}

fn habits_view(habits: &[Habit], today: Date) -> Markup {
    let nav_bar = NavBar::new(Module::Habits).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            (new_habit_form())
            (habit_list_view(habits, today))
        }
    };

    base(Module::Habits.title(), &[], &content)
}

fn new_habit_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::HABITS_API)
            hx-target={ "#" (HABIT_LIST_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full max-w-md flex items-end gap-2"
        {
            div class="grow"
            {
                label for="name" class=(FORM_LABEL_STYLE) { "New habit" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="e.g. Read for 20 minutes"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div { button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" } }
        }
    }
}

/// The habit cards, one per habit, each with its month grid and progress.
pub(super) fn habit_list_view(habits: &[Habit], today: Date) -> Markup {
    html! {
        div id=(HABIT_LIST_ID) class="w-full max-w-2xl space-y-6"
        {
            @if habits.is_empty() {
                p class="text-center text-gray-500 dark:text-gray-400"
                {
                    "No habits yet. Add one above to start tracking."
                }
            }

            @for habit in habits {
                (habit_card(habit, today))
            }
        }
    }
}

fn habit_card(habit: &Habit, today: Date) -> Markup {
    let grid = habit_month_grid(today, &habit.completed_dates);
    let progress = habit_progress(&habit.completed_dates, grid.days_in_month);
    let delete_url = format_endpoint(endpoints::HABIT, habit.id);
    let list_target = format!("#{HABIT_LIST_ID}");

    html! {
        section
            class="habit p-4 rounded bg-white dark:bg-gray-800 shadow-sm"
            data-habit-id=(habit.id)
        {
            div class="flex items-center justify-between mb-2"
            {
                h3 class="text-lg font-semibold" { (habit.name) }
                (delete_button(&delete_url, &list_target))
            }

            p class="mb-1 text-sm"
            {
                "Progress: " span class="habit-progress" { (progress) "%" }
            }

            div class="w-full h-2 mb-4 bg-gray-200 rounded dark:bg-gray-700"
            {
                div
                    class="h-2 bg-green-600 rounded"
                    style=(format!("width: {progress}%"))
                {}
            }

            div class="habit-grid grid grid-cols-7 gap-1 text-center text-sm"
            {
                @for weekday in WEEKDAY_HEADERS {
                    div class="weekday-header font-medium text-gray-500 dark:text-gray-400"
                    {
                        (weekday)
                    }
                }

                @for cell in &grid.cells {
                    @match cell {
                        HabitCell::Placeholder => {
                            div class="habit-day placeholder" {}
                        }
                        HabitCell::Day(day) => {
                            (day_button(habit, day, &list_target))
                        }
                    }
                }
            }
        }
    }
}

fn day_button(habit: &Habit, day: &DayCell, list_target: &str) -> Markup {
    let key = day.key();
    let toggle_url = format_endpoint(&format_endpoint(endpoints::HABIT_DAY, habit.id), &key);

    let mut class = String::from("habit-day p-2 rounded cursor-pointer");
    match day.status {
        DayStatus::Completed => class.push_str(" completed"),
        DayStatus::Missed => class.push_str(" missed"),
        DayStatus::Pending => {}
    }
    if day.is_today {
        class.push_str(" today");
    }

    html! {
        button
            type="button"
            class=(class)
            data-date=(key)
            title=(key)
            hx-post=(toggle_url)
            hx-target=(list_target)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
        {
            (day.date.day())
        }
    }
}

#[cfg(test)]
mod habits_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::{
        OffsetDateTime,
        macros::{date, datetime},
    };

    use crate::{
        endpoints,
        habit::{HabitName, create_habit, get_habits_page, toggle_habit_date},
        storage::initialize,
        test_utils::{
            assert_content_type, assert_form_input, assert_hx_endpoint, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    use super::{HabitsState, habit_list_view};

    fn get_test_state() -> HabitsState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");

        HabitsState {
            db_connection: Arc::new(Mutex::new(connection)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn select_count(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }

    #[tokio::test]
    async fn render_page_with_form_and_habits() {
        let state = get_test_state();
        create_habit(
            HabitName::new_unchecked("Read"),
            OffsetDateTime::now_utc(),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = get_habits_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::HABITS_API, "hx-post");
        assert_form_input(&form, "name", "text");

        assert_eq!(select_count(&html, "#habit-list .habit"), 1);
        let title = html
            .select(&Selector::parse("#module-title").unwrap())
            .next()
            .expect("No module title found")
            .text()
            .collect::<String>();
        assert_eq!(title.trim(), "Habit Tracker");
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let mut state = get_test_state();
        state.local_timezone = "Not/A_Timezone".to_owned();

        let result = get_habits_page(State(state)).await;

        assert!(result.is_err());
    }

    #[test]
    fn grid_renders_headers_placeholders_and_days() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let habit = create_habit(
            HabitName::new_unchecked("Read"),
            datetime!(2024-06-01 08:00:00 UTC),
            &connection,
        )
        .unwrap();
        toggle_habit_date(habit.id, date!(2024 - 06 - 01), &connection).unwrap();
        toggle_habit_date(habit.id, date!(2024 - 06 - 02), &connection).unwrap();
        let habits = crate::habit::get_habits(&connection).unwrap();

        let markup = habit_list_view(&habits, date!(2024 - 06 - 15)).into_string();
        let html = Html::parse_fragment(&markup);

        assert_valid_html(&html);
        // 7 weekday headers, 6 placeholders (1 June 2024 was a Saturday), 30 days.
        assert_eq!(select_count(&html, ".habit-grid > *"), 7 + 6 + 30);
        assert_eq!(select_count(&html, ".weekday-header"), 7);
        assert_eq!(select_count(&html, ".habit-day.placeholder"), 6);
        assert_eq!(select_count(&html, ".habit-day.placeholder[hx-post]"), 0);
        assert_eq!(select_count(&html, "button.habit-day"), 30);
        assert_eq!(select_count(&html, ".habit-day.completed"), 2);
        assert_eq!(select_count(&html, ".habit-day.missed"), 12);
        assert_eq!(select_count(&html, ".habit-day.today"), 1);

        let progress = html
            .select(&Selector::parse(".habit-progress").unwrap())
            .next()
            .expect("No progress found")
            .text()
            .collect::<String>();
        assert_eq!(progress, "7%");

        let first_day = html
            .select(&Selector::parse("button.habit-day").unwrap())
            .next()
            .unwrap();
        assert_eq!(first_day.value().attr("data-date"), Some("2024-06-01"));
        assert_hx_endpoint(
            &first_day,
            &format!("/api/habits/{}/toggle/2024-06-01", habit.id),
            "hx-post",
        );
    }

    #[test]
    fn empty_list_shows_hint() {
        let markup = habit_list_view(&[], date!(2024 - 06 - 15)).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(select_count(&html, "#habit-list .habit"), 0);
        assert_eq!(select_count(&html, "#habit-list p"), 1);
    }
}

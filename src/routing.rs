//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{create_transaction_endpoint, delete_transaction_endpoint, get_budget_page},
    calendar::{get_calendar_day_endpoint, get_calendar_page},
    endpoints,
    habit::{
        create_habit_endpoint, delete_habit_endpoint, get_habits_page, toggle_habit_endpoint,
    },
    error_page::{get_404_not_found, get_internal_server_error_page},
    todo::{
        create_todo_endpoint, delete_todo_endpoint, get_todo_list_endpoint, get_todo_page,
        sort_todos_endpoint, toggle_todo_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::HABITS_VIEW, get(get_habits_page))
        .route(endpoints::BUDGET_VIEW, get(get_budget_page))
        .route(endpoints::TODO_VIEW, get(get_todo_page))
        .route(endpoints::CALENDAR_VIEW, get(get_calendar_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::HABITS_API, post(create_habit_endpoint))
        .route(endpoints::HABIT, delete(delete_habit_endpoint))
        .route(endpoints::HABIT_DAY, post(toggle_habit_endpoint))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(
            endpoints::TODOS_API,
            get(get_todo_list_endpoint).post(create_todo_endpoint),
        )
        .route(endpoints::TODO, delete(delete_todo_endpoint))
        .route(endpoints::TOGGLE_TODO, post(toggle_todo_endpoint))
        .route(endpoints::SORT_TODOS, post(sort_todos_endpoint))
        .route(endpoints::CALENDAR_DAY, get(get_calendar_day_endpoint));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the habit tracker, the first module in the navigation bar.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::HABITS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_habits() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::HABITS_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{AppState, build_router, endpoints, endpoints::format_endpoint};

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn count(html: &str, selector: &str) -> usize {
        Html::parse_document(html)
            .select(&Selector::parse(selector).unwrap())
            .count()
    }

    #[tokio::test]
    async fn every_page_renders_its_title() {
        let server = get_test_server();
        let pages = [
            (endpoints::HABITS_VIEW, "Habit Tracker"),
            (endpoints::BUDGET_VIEW, "Kosztorys"),
            (endpoints::TODO_VIEW, "TodoList"),
            (endpoints::CALENDAR_VIEW, "Calendar View"),
        ];

        for (page, want_title) in pages {
            let response = server.get(page).await;
            response.assert_status_ok();

            let html = Html::parse_document(&response.text());
            let title = html
                .select(&Selector::parse("#module-title").unwrap())
                .next()
                .unwrap_or_else(|| panic!("No module title on {page}"))
                .text()
                .collect::<String>();
            assert_eq!(title.trim(), want_title);
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/wishes")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_calendar_month_is_bad_request() {
        let server = get_test_server();

        server
            .get("/calendar?year=2024&month=13")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn habit_can_be_created_toggled_and_deleted() {
        let server = get_test_server();

        let response = server
            .post(endpoints::HABITS_API)
            .form(&[("name", "Stretch")])
            .await;
        response.assert_status_ok();
        let fragment = response.text();
        assert_eq!(count(&fragment, "section.habit"), 1);

        let habit_id = Html::parse_fragment(&fragment)
            .select(&Selector::parse("section.habit").unwrap())
            .next()
            .and_then(|habit| habit.value().attr("data-habit-id"))
            .expect("habit card without an id")
            .to_owned();

        let today = time::OffsetDateTime::now_utc().date();
        let toggle_url = format_endpoint(
            &format_endpoint(endpoints::HABIT_DAY, &habit_id),
            crate::date::iso_date(today),
        );
        let response = server.post(&toggle_url).await;
        response.assert_status_ok();
        assert_eq!(count(&response.text(), ".habit-day.completed"), 1);

        let response = server
            .delete(&format_endpoint(endpoints::HABIT, &habit_id))
            .await;
        response.assert_status_ok();
        assert_eq!(count(&response.text(), "section.habit"), 0);
    }

    #[tokio::test]
    async fn transaction_updates_balance() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("amount", "100"),
                ("description", "Salary"),
                ("category", "salary"),
                ("type", "income"),
            ])
            .await;
        response.assert_status_ok();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("amount", "40"),
                ("description", "Groceries"),
                ("category", "food"),
                ("type", "expense"),
            ])
            .await;
        response.assert_status_ok();

        let html = Html::parse_fragment(&response.text());
        let balance = html
            .select(&Selector::parse("#balance").unwrap())
            .next()
            .expect("No balance found");
        assert_eq!(balance.text().collect::<String>().trim(), "60.00 zł");
        let balance_class = balance.value().attr("class").unwrap_or_default();
        assert!(
            balance_class.split_whitespace().any(|class| class == "income"),
            "want balance with class income, got {balance_class:?}"
        );
    }

    #[tokio::test]
    async fn todo_changes_trigger_list_reload() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TODOS_API)
            .form(&[
                ("title", "Renew passport"),
                ("description", ""),
                ("priority", "high"),
                ("category", "personal"),
                ("date", "2024-06-10"),
            ])
            .await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(response.header("hx-trigger"), "todos-changed");

        let response = server.get("/api/todos?status=active").await;
        response.assert_status_ok();
        assert_eq!(count(&response.text(), "li.todo-item"), 1);

        let response = server
            .get(&format_endpoint(endpoints::CALENDAR_DAY, "2024-06-10"))
            .await;
        response.assert_status_ok();
        assert_eq!(count(&response.text(), ".calendar-todo"), 1);

        server
            .post(endpoints::SORT_TODOS)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}

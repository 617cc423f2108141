//! Full-page error responses, used when a page handler cannot render its page.
//!
//! Endpoints that respond with htmx fragments use [crate::alert::Alert] instead.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A page explaining what went wrong and what the user can do about it.
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    pub fn internal_server_error(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }

    pub fn bad_request(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            description,
            fix,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Use the navigation bar to go back to your dashboard.",
        }
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal_server_error(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let page = error_view(title, self.status.as_str(), self.description, self.fix);

        (self.status, Html(page.into_string())).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

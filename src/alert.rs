//! Error alerts shown to the user after a failed htmx request.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the base page, see [crate::html::base].

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// An error message with optional details, e.g., how to fix the error.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start p-4 mb-4 text-red-800 border border-red-300 rounded-lg
                    bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="ms-3 text-sm"
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="mt-1" { (self.details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8"
                    aria-label="Close"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

//! The page layout and the Tailwind classes shared by every module's views.

use maud::{DOCTYPE, Markup, html};

// Buttons
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 rounded font-medium \
    text-white bg-teal-600 hover:enabled:bg-teal-700 disabled:bg-teal-800 \
    dark:bg-teal-500 hover:enabled:dark:bg-teal-600";

pub const BUTTON_SECONDARY_STYLE: &str = "px-4 py-2 rounded text-sm font-medium \
    text-slate-800 bg-white border border-slate-300 hover:bg-slate-100 \
    hover:text-teal-700 dark:text-slate-300 dark:bg-slate-800 \
    dark:border-slate-600 dark:hover:bg-slate-700 dark:hover:text-white";

pub const BUTTON_DELETE_STYLE: &str = "text-sm text-rose-600 hover:text-rose-500 \
    dark:text-rose-400 dark:hover:text-rose-300 underline cursor-pointer";

// Forms
pub const FORM_LABEL_STYLE: &str =
    "block mb-1 text-sm font-medium text-slate-800 dark:text-slate-100";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full px-3 py-2 rounded text-sm \
    text-slate-900 bg-white border border-slate-300 placeholder-slate-400 \
    focus:border-teal-600 focus:ring-teal-600 dark:text-white dark:bg-slate-700 \
    dark:border-slate-600 dark:placeholder-slate-400";
pub const FORM_RADIO_GROUP_STYLE: &str = "flex gap-2";
pub const FORM_RADIO_INPUT_STYLE: &str = "peer sr-only";
pub const FORM_RADIO_LABEL_STYLE: &str = "flex-1 px-3 py-2 rounded text-sm text-center \
    font-medium cursor-pointer text-slate-700 bg-white border border-slate-300 \
    dark:text-slate-100 dark:bg-slate-700 dark:border-slate-600 \
    peer-checked:border-teal-600 peer-checked:bg-teal-50 peer-checked:text-teal-800";

// Tables
pub const TABLE_HEADER_STYLE: &str =
    "text-xs uppercase text-slate-600 bg-slate-100 dark:text-slate-300 dark:bg-slate-700";
pub const TABLE_ROW_STYLE: &str =
    "border-b border-slate-200 bg-white dark:border-slate-700 dark:bg-slate-800";
pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

// Small pill used for categories and priorities
pub const BADGE_STYLE: &str = "inline-flex items-center px-2 py-0.5 rounded-full \
    text-xs font-semibold text-teal-800 bg-teal-100 dark:text-teal-200 dark:bg-teal-900";

pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center gap-6 px-4 py-6 mx-auto text-slate-900 dark:text-slate-100";

/// Extra elements a page adds to the document head.
pub enum HeadElement {
    /// The URL of a JavaScript file.
    ScriptLink(String),
}

/// Wrap `content` in the document shared by every page.
///
/// Every page loads Tailwind, htmx and the htmx response-targets extension,
/// and has an `#alert-container` that endpoints target with error alerts.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Daybook" }
                link href="/static/daybook.css" rel="stylesheet";

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4/dist/response-targets.min.js" {}

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(url) => script src=(url) {}
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-slate-50 dark:bg-slate-900"
            {
                (content)

                div id="alert-container" class="w-full max-w-md px-4" {}
            }
        }
    }
}

/// A full page showing an HTTP status code, what went wrong and how to recover.
pub fn error_view(title: &str, status: &str, description: &str, fix: &str) -> Markup {
    let content = html! {
        main class="flex flex-col items-center gap-4 px-4 py-16 text-center"
        {
            h1 class="text-7xl lg:text-8xl font-extrabold text-teal-600 dark:text-teal-400"
            {
                (status)
            }

            p class="text-2xl md:text-3xl font-bold text-slate-900 dark:text-white"
            {
                (description)
            }

            p class="max-w-xl text-lg text-slate-700 dark:text-slate-300"
            {
                (fix)
            }

            a href="/" class="mt-4 px-5 py-2.5 rounded text-sm font-medium text-white bg-teal-600 hover:bg-teal-700"
            {
                "Back to your habits"
            }
        }
    };

    base(title, &[], &content)
}

/// A button that sends a DELETE request to `url` and swaps `target` with the response.
pub fn delete_button(url: &str, target: &str) -> Markup {
    html! {
        button
            type="button"
            hx-delete=(url)
            hx-target=(target)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class=(BUTTON_DELETE_STYLE)
        {
            "Delete"
        }
    }
}

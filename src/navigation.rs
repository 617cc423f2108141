//! This file defines the dashboard modules and the navigation bar used to switch between them.

use maud::{Markup, html};

use crate::endpoints;

/// One of the independent feature areas of the dashboard.
///
/// Exactly one module is active at a time, i.e., the module whose page is
/// currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Habits,
    Budget,
    Todo,
    Calendar,
}

impl Module {
    /// All modules in the order they appear in the navigation bar.
    pub const ALL: [Module; 4] = [
        Module::Habits,
        Module::Budget,
        Module::Todo,
        Module::Calendar,
    ];

    /// The heading displayed at the top of the module's page.
    pub fn title(self) -> &'static str {
        match self {
            Module::Habits => "Habit Tracker",
            Module::Budget => "Kosztorys",
            Module::Todo => "TodoList",
            Module::Calendar => "Calendar View",
        }
    }

    /// The label used for the module's link in the navigation bar.
    fn nav_label(self) -> &'static str {
        match self {
            Module::Habits => "Habits",
            Module::Budget => "Budget",
            Module::Todo => "Todo",
            Module::Calendar => "Calendar",
        }
    }

    /// The page that displays the module.
    pub fn endpoint(self) -> &'static str {
        match self {
            Module::Habits => endpoints::HABITS_VIEW,
            Module::Budget => endpoints::BUDGET_VIEW,
            Module::Todo => endpoints::TODO_VIEW,
            Module::Calendar => endpoints::CALENDAR_VIEW,
        }
    }
}

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    module: Module,
    is_current: bool,
}

impl Link {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!(
            a
                href=(self.module.endpoint())
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.module.nav_label())
            }
        )
    }
}

pub struct NavBar {
    active_module: Module,
    links: Vec<Link>,
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// The link for `active_module` will be marked as active and displayed
    /// differently in the HTML.
    pub fn new(active_module: Module) -> NavBar {
        let links = Module::ALL
            .into_iter()
            .map(|module| Link {
                module,
                is_current: module == active_module,
            })
            .collect();

        NavBar {
            active_module,
            links,
        }
    }

    /// Render the navigation bar followed by the active module's title.
    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href="/"
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Daybook"
                        }
                    }

                    ul
                        class="font-medium flex flex-row p-0 space-x-8 rtl:space-x-reverse"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }

            h1
                id="module-title"
                class="mt-4 text-center text-2xl font-bold text-gray-900 dark:text-white"
            {
                (self.active_module.title())
            }
        )
    }
}

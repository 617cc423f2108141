//! The budget page and the budget fragment that the transaction endpoints respond with.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{UtcOffset, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    budget::{
        BudgetCategory, Transaction, TransactionType,
        chart::{ECHARTS_SCRIPT, expenses_chart_view},
        get_transactions,
        summary::{BudgetSummary, ExpenseSlice, expense_slices, format_amount, summarise},
    },
    endpoints::{self, format_endpoint},
    html::{
        BADGE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, HeadElement,
        base, delete_button,
    },
    navigation::{Module, NavBar},
    timezone::get_local_offset,
};

/// The id of the element with the totals, chart and transaction list.
pub(super) const BUDGET_CONTENT_ID: &str = "budget-content";

const DATE_TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// The state needed by the budget page and endpoints.
#[derive(Debug, Clone)]
pub struct BudgetState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Warsaw".
    pub local_timezone: String,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the budget page.
pub async fn get_budget_page(State(state): State<BudgetState>) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(state.local_timezone.clone()))?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_transactions(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve transactions: {error}"))?;

    Ok(budget_view(&transactions, local_offset).into_response())
}

/// Load the transactions and render the budget fragment, or an alert if that fails.
pub(super) fn budget_content_response(connection: &Connection, local_timezone: &str) -> Response {
    let Some(local_offset) = get_local_offset(local_timezone) else {
        return Error::InvalidTimezoneError(local_timezone.to_owned()).into_alert_response();
    };

    match get_transactions(connection) {
        Ok(transactions) => budget_content_view(&transactions, local_offset).into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve transactions: {error}");
            error.into_alert_response()
        }
    }
}

fn budget_view(transactions: &[Transaction], local_offset: UtcOffset) -> Markup {
    let nav_bar = NavBar::new(Module::Budget).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            (new_transaction_form())
            (budget_content_view(transactions, local_offset))
        }
    };

    base(
        Module::Budget.title(),
        &[HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())],
        &content,
    )
}

fn new_transaction_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target={ "#" (BUDGET_CONTENT_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full max-w-md space-y-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="e.g. Groceries"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select id="category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in BudgetCategory::ALL {
                        option value=(category.as_str()) { (category.label()) }
                    }
                }
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for type_ in TransactionType::ALL {
                        @let id = format!("type-{}", type_.as_str());

                        label for=(id) class="flex-1"
                        {
                            input
                                id=(id)
                                type="radio"
                                name="type"
                                value=(type_.as_str())
                                checked[type_ == TransactionType::Expense]
                                class=(FORM_RADIO_INPUT_STYLE);

                            span class=(FORM_RADIO_LABEL_STYLE) { (type_.label()) }
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

/// The totals, the expenses chart and the transaction list.
pub(super) fn budget_content_view(transactions: &[Transaction], local_offset: UtcOffset) -> Markup {
    let summary = summarise(transactions);
    let slices = expense_slices(transactions);

    let mut newest_first = transactions.iter().collect::<Vec<_>>();
    newest_first.sort_by(|a, b| b.date.cmp(&a.date));

    html! {
        div id=(BUDGET_CONTENT_ID) class="w-full max-w-3xl space-y-6"
        {
            (summary_view(&summary))

            section class="space-y-4"
            {
                (expenses_chart_view(&slices))
                (legend_view(&slices))
            }

            (transaction_table(&newest_first, local_offset))
        }
    }
}

fn summary_view(summary: &BudgetSummary) -> Markup {
    html! {
        section id="budget-summary" class="grid grid-cols-3 gap-4 text-center"
        {
            div class="p-4 rounded bg-white dark:bg-gray-800"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Income" }
                p id="total-income" class="text-xl font-semibold" {
                    (format_amount(summary.total_income))
                }
            }

            div class="p-4 rounded bg-white dark:bg-gray-800"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Expenses" }
                p id="total-expenses" class="text-xl font-semibold" {
                    (format_amount(summary.total_expenses))
                }
            }

            div class="p-4 rounded bg-white dark:bg-gray-800"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Balance" }
                p id="balance" class={ "balance text-xl font-semibold " (summary.balance_class()) } {
                    (format_amount(summary.balance))
                }
            }
        }
    }
}

fn legend_view(slices: &[ExpenseSlice]) -> Markup {
    html! {
        @if !slices.is_empty() {
            table id="expenses-legend" class="w-full text-sm text-left"
            {
                tbody
                {
                    @for slice in slices {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class="px-6 py-2"
                            {
                                span
                                    class="inline-block w-3 h-3 mr-2 rounded-full"
                                    style=(format!("background-color: {}", slice.color))
                                {}
                                (slice.category.label())
                            }
                            td class="px-6 py-2" { (format_amount(slice.total)) }
                            td class="px-6 py-2 legend-share" { (slice.percentage()) }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_table(transactions: &[&Transaction], local_offset: UtcOffset) -> Markup {
    let content_target = format!("#{BUDGET_CONTENT_ID}");

    html! {
        @if transactions.is_empty() {
            p class="text-center text-gray-500 dark:text-gray-400" { "No transactions yet." }
        } @else {
            table id="transactions" class="w-full text-sm text-left"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        @let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
                        @let date = transaction
                            .date
                            .to_offset(local_offset)
                            .format(DATE_TIME_FORMAT)
                            .unwrap_or_default();

                        tr class={ "transaction " (TABLE_ROW_STYLE) } data-transaction-id=(transaction.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                span class=(BADGE_STYLE) { (transaction.category.label()) }
                            }
                            td class={ (TABLE_CELL_STYLE) " balance " (transaction.type_.as_str()) }
                            {
                                @if transaction.type_ == TransactionType::Expense { "-" }
                                (format_amount(transaction.amount))
                            }
                            td class=(TABLE_CELL_STYLE)
                            {
                                (delete_button(&delete_url, &content_target))
                            }
                        }
                    }
                }
            }
        }
    }
}

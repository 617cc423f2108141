//! The budget ledger: income and expense transactions, their totals and a
//! pie chart of where the money went.

mod chart;
mod create;
mod db;
mod delete;
mod domain;
mod list;
mod summary;

pub use create::create_transaction_endpoint;
pub use db::{create_transaction, delete_transaction, get_transactions};
pub use delete::delete_transaction_endpoint;
pub use domain::{BudgetCategory, NewTransaction, Transaction, TransactionId, TransactionType};
pub use list::get_budget_page;

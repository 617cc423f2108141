//! Transaction creation endpoint.

use axum::{Form, extract::State, response::Response};
use time::OffsetDateTime;

use crate::{
    Error,
    budget::{
        NewTransaction, create_transaction,
        domain::TransactionFormData,
        list::{BudgetState, budget_content_response},
    },
};

/// Handle the new transaction form.
///
/// An amount that is empty, not a number or not positive does not create
/// anything, the unchanged budget is rendered instead.
pub async fn create_transaction_endpoint(
    State(state): State<BudgetState>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match NewTransaction::new(&form.amount, &form.description, form.category, form.type_) {
        Ok(new_transaction) => {
            if let Err(error) =
                create_transaction(new_transaction, OffsetDateTime::now_utc(), &connection)
            {
                tracing::error!("An unexpected error occurred while creating a transaction: {error}");
                return error.into_alert_response();
            }
        }
        Err(error) => tracing::debug!("Ignoring new transaction: {error}"),
    }

    budget_content_response(&connection, &state.local_timezone)
}

//! Transaction deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    budget::{
        TransactionId,
        db::delete_transaction,
        list::{BudgetState, budget_content_response},
    },
};

/// Delete a transaction and re-render the budget.
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<BudgetState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_transaction(transaction_id, &connection) {
        Ok(_) => budget_content_response(&connection, &state.local_timezone),
        Err(Error::DeleteMissingTransaction) => {
            Error::DeleteMissingTransaction.into_alert_response()
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting transaction {transaction_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

//! Storage operations for transactions.

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    budget::{NewTransaction, Transaction, TransactionId},
    record_id::next_record_id,
    storage::{StorageKey, load, save},
};

/// Retrieve all transactions in the order they were entered.
pub fn get_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    load(StorageKey::Transactions, connection)
}

/// Store a transaction entered at `now` and return it with its generated ID.
pub fn create_transaction(
    new_transaction: NewTransaction,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let mut transactions = get_transactions(connection)?;

    let id = next_record_id(transactions.iter().map(|transaction| transaction.id), now);
    let transaction = new_transaction.into_transaction(id, now);
    transactions.push(transaction.clone());

    save(StorageKey::Transactions, &transactions, connection)?;

    Ok(transaction)
}

/// Delete a transaction by ID. Returns an error if the transaction doesn't exist.
pub fn delete_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<(), Error> {
    let mut transactions = get_transactions(connection)?;
    let count_before = transactions.len();

    transactions.retain(|transaction| transaction.id != transaction_id);

    if transactions.len() == count_before {
        return Err(Error::DeleteMissingTransaction);
    }

    save(StorageKey::Transactions, &transactions, connection)
}

#[cfg(test)]
mod transaction_db_tests {
    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        Error,
        budget::{
            BudgetCategory, NewTransaction, TransactionType, create_transaction,
            delete_transaction, get_transactions,
        },
        storage::initialize,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn new_expense(amount: &str) -> NewTransaction {
        NewTransaction::new(amount, "", BudgetCategory::Food, TransactionType::Expense).unwrap()
    }

    #[test]
    fn create_transaction_persists_transaction() {
        let connection = get_test_connection();
        let now = datetime!(2024-06-01 12:00:00 UTC);

        let transaction = create_transaction(new_expense("12.34"), now, &connection).unwrap();

        assert_eq!(transaction.amount, 12.34);
        assert_eq!(transaction.date, now);
        assert_eq!(get_transactions(&connection).unwrap(), vec![transaction]);
    }

    #[test]
    fn delete_transaction_keeps_order_of_others() {
        let connection = get_test_connection();
        let now = datetime!(2024-06-01 12:00:00 UTC);
        let first = create_transaction(new_expense("1"), now, &connection).unwrap();
        let second = create_transaction(new_expense("2"), now, &connection).unwrap();
        let third = create_transaction(new_expense("3"), now, &connection).unwrap();

        delete_transaction(second.id, &connection).unwrap();

        assert_eq!(get_transactions(&connection).unwrap(), vec![first, third]);
    }

    #[test]
    fn delete_missing_transaction_is_an_error() {
        let connection = get_test_connection();

        let result = delete_transaction(42, &connection);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }
}

//! Core budget domain types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, record_id::RecordId};

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money spent.
    Expense,
    /// Money received.
    Income,
}

impl TransactionType {
    /// All transaction types in the order they are offered in the form.
    pub const ALL: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

    /// The value used in forms and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }

    /// The human readable name.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        }
    }
}

/// What a transaction was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    /// Groceries and eating out.
    Food,
    /// Public transport, fuel, tickets.
    Transport,
    /// Rent, bills and repairs.
    Housing,
    /// Films, games, going out.
    Entertainment,
    /// Medicine, doctors and sport.
    Health,
    /// Clothes and other shopping.
    Shopping,
    /// Wages.
    Salary,
    /// Anything else.
    Other,
}

impl BudgetCategory {
    /// All categories in the order they are offered in the form.
    pub const ALL: [BudgetCategory; 8] = [
        BudgetCategory::Food,
        BudgetCategory::Transport,
        BudgetCategory::Housing,
        BudgetCategory::Entertainment,
        BudgetCategory::Health,
        BudgetCategory::Shopping,
        BudgetCategory::Salary,
        BudgetCategory::Other,
    ];

    /// The value used in forms and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetCategory::Food => "food",
            BudgetCategory::Transport => "transport",
            BudgetCategory::Housing => "housing",
            BudgetCategory::Entertainment => "entertainment",
            BudgetCategory::Health => "health",
            BudgetCategory::Shopping => "shopping",
            BudgetCategory::Salary => "salary",
            BudgetCategory::Other => "other",
        }
    }

    /// The human readable name.
    pub fn label(self) -> &'static str {
        match self {
            BudgetCategory::Food => "Food",
            BudgetCategory::Transport => "Transport",
            BudgetCategory::Housing => "Housing",
            BudgetCategory::Entertainment => "Entertainment",
            BudgetCategory::Health => "Health",
            BudgetCategory::Shopping => "Shopping",
            BudgetCategory::Salary => "Salary",
            BudgetCategory::Other => "Other",
        }
    }
}

/// Identifier for a transaction, its creation timestamp.
pub type TransactionId = RecordId;

/// An amount of money that was spent or received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Always positive, `type_` gives the direction.
    pub amount: f64,
    pub description: String,
    pub category: BudgetCategory,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// When the transaction was entered.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    amount: f64,
    description: String,
    category: BudgetCategory,
    type_: TransactionType,
}

impl NewTransaction {
    /// Validate the fields of a new transaction.
    ///
    /// `description` is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `amount` is not
    /// a finite number greater than zero.
    pub fn new(
        amount: &str,
        description: &str,
        category: BudgetCategory,
        type_: TransactionType,
    ) -> Result<Self, Error> {
        let parsed = amount
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidAmount(amount.to_owned()))?;

        if !parsed.is_finite() || parsed <= 0.0 {
            return Err(Error::InvalidAmount(amount.to_owned()));
        }

        Ok(Self {
            amount: parsed,
            description: description.trim().to_owned(),
            category,
            type_,
        })
    }

    /// Give the transaction its ID and creation time.
    pub(super) fn into_transaction(self, id: TransactionId, date: OffsetDateTime) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            category: self.category,
            type_: self.type_,
            date,
        }
    }
}

/// Form data for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionFormData {
    pub amount: String,
    #[serde(default)]
    pub description: String,
    pub category: BudgetCategory,
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

//! Totals, balance and the per-category breakdown of expenses.

use crate::budget::{BudgetCategory, Transaction, TransactionType};

/// The colours given to the pie chart slices, reused from the start when
/// there are more categories than colours.
pub const SLICE_PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#7BC225",
];

/// Totals over every transaction in the ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
}

impl BudgetSummary {
    /// The CSS class for the balance, `income` when it is zero or more.
    pub fn balance_class(&self) -> &'static str {
        if self.balance >= 0.0 {
            "income"
        } else {
            "expense"
        }
    }
}

/// Sum the income and expenses.
pub fn summarise(transactions: &[Transaction]) -> BudgetSummary {
    let (total_income, total_expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), transaction| {
                match transaction.type_ {
                    TransactionType::Income => (income + transaction.amount, expenses),
                    TransactionType::Expense => (income, expenses + transaction.amount),
                }
            });

    BudgetSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Format an amount of money, e.g. `100.00 zł`.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2} zł")
}

/// One category's share of the expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSlice {
    pub category: BudgetCategory,
    pub total: f64,
    /// `total` divided by the total expenses, between 0 and 1.
    pub share: f64,
    pub color: &'static str,
}

impl ExpenseSlice {
    /// The share as a whole-number percentage, e.g. "25%".
    pub fn percentage(&self) -> String {
        format!("{:.0}%", self.share * 100.0)
    }
}

/// Split the expenses into one slice per category.
///
/// Slices appear in the order each category is first seen in
/// `transactions`. Income is ignored. Returns no slices when there are no
/// expenses.
pub fn expense_slices(transactions: &[Transaction]) -> Vec<ExpenseSlice> {
    let mut totals: Vec<(BudgetCategory, f64)> = Vec::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.type_ == TransactionType::Expense)
    {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == transaction.category)
        {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((transaction.category, transaction.amount)),
        }
    }

    let total_expenses: f64 = totals.iter().map(|(_, total)| total).sum();
    if total_expenses <= 0.0 {
        return Vec::new();
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(index, (category, total))| ExpenseSlice {
            category,
            total,
            share: total / total_expenses,
            color: SLICE_PALETTE[index % SLICE_PALETTE.len()],
        })
        .collect()
}

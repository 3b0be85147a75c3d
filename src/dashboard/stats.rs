//! Whole-history totals of income and expenses.

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// Summary totals over a set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub net_income: f64,
    /// The number of transactions of either type.
    pub transaction_count: usize,
    /// The number of income transactions.
    pub income_count: usize,
    /// The number of expense transactions.
    pub expense_count: usize,
}

impl TransactionStats {
    /// Calculate the totals for `transactions`.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = calculate_total_income(transactions);
        let total_expenses = calculate_total_expenses(transactions);

        Self {
            total_income,
            total_expenses,
            net_income: total_income - total_expenses,
            transaction_count: transactions.len(),
            income_count: count_type(transactions, TransactionType::Income),
            expense_count: count_type(transactions, TransactionType::Expense),
        }
    }
}

fn sum_type(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        // `Sum for f64` starts from -0.0, which serializes as "-0.0".
        .fold(0.0, |total, amount| total + amount)
}

fn count_type(transactions: &[Transaction], transaction_type: TransactionType) -> usize {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .count()
}

/// The sum of the amounts of the income transactions.
pub fn calculate_total_income(transactions: &[Transaction]) -> f64 {
    sum_type(transactions, TransactionType::Income)
}

/// The sum of the amounts of the expense transactions.
pub fn calculate_total_expenses(transactions: &[Transaction]) -> f64 {
    sum_type(transactions, TransactionType::Expense)
}

/// Total income minus total expenses.
pub fn calculate_net_income(transactions: &[Transaction]) -> f64 {
    calculate_total_income(transactions) - calculate_total_expenses(transactions)
}

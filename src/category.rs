//! The fixed catalog of transaction categories.
//!
//! Clients are expected to pick a category from this list, but the store
//! accepts any non-empty category name.

use axum::{Json, response::IntoResponse};
use serde::Serialize;

use crate::transaction::TransactionType;

/// The suggested category names for each transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionCategories {
    /// Categories for money earned.
    pub income: &'static [&'static str],
    /// Categories for money spent.
    pub expense: &'static [&'static str],
}

impl TransactionCategories {
    /// The categories listed for `transaction_type`.
    pub fn for_type(&self, transaction_type: TransactionType) -> &'static [&'static str] {
        match transaction_type {
            TransactionType::Income => self.income,
            TransactionType::Expense => self.expense,
        }
    }
}

/// The category catalog used by the application.
pub static TRANSACTION_CATEGORIES: TransactionCategories = TransactionCategories {
    income: &[
        "Salary",
        "Freelance",
        "Investment",
        "Business",
        "Other Income",
    ],
    expense: &[
        "Food & Dining",
        "Transportation",
        "Housing",
        "Utilities",
        "Entertainment",
        "Healthcare",
        "Shopping",
        "Education",
        "Travel",
        "Other Expenses",
    ],
};

/// Whether `category` is in the catalog for `transaction_type`.
pub fn is_known_category(transaction_type: TransactionType, category: &str) -> bool {
    TRANSACTION_CATEGORIES
        .for_type(transaction_type)
        .iter()
        .any(|known| *known == category)
}

/// A route handler that returns the category catalog as JSON.
pub async fn get_categories_endpoint() -> impl IntoResponse {
    Json(TRANSACTION_CATEGORIES)
}

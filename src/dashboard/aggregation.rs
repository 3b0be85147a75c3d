//! Transaction data aggregation for charts.
//!
//! Groups transactions by calendar month and totals their income and
//! expenses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Month;

use crate::transaction::{Transaction, TransactionType};

/// The income, expenses and net income for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// The calendar year, e.g. 2024.
    pub year: i32,
    /// The month of the year, starting at 1 for January.
    pub month: u8,
    /// The sum of income amounts in the month.
    pub income: f64,
    /// The sum of expense amounts in the month.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
}

impl MonthlyStats {
    fn empty(year: i32, month: u8) -> Self {
        Self {
            year,
            month,
            income: 0.0,
            expenses: 0.0,
            net: 0.0,
        }
    }

    /// A chart label for the month, e.g. "Jan 2024".
    pub fn label(&self) -> String {
        let month = Month::try_from(self.month)
            .map(format_month)
            .unwrap_or("???");

        format!("{month} {}", self.year)
    }
}

/// Totals transaction amounts by calendar month.
///
/// Income amounts are added to [MonthlyStats::income] and every other
/// transaction is counted as an expense. Months without transactions are
/// left out.
///
/// # Returns
/// One [MonthlyStats] per month that has transactions, in chronological order.
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyStats> {
    let mut buckets: BTreeMap<(i32, u8), MonthlyStats> = BTreeMap::new();

    for transaction in transactions {
        let key = (transaction.date.year(), u8::from(transaction.date.month()));
        let bucket = buckets
            .entry(key)
            .or_insert_with(|| MonthlyStats::empty(key.0, key.1));

        match transaction.transaction_type {
            TransactionType::Income => bucket.income += transaction.amount,
            TransactionType::Expense => bucket.expenses += transaction.amount,
        }
    }

    buckets
        .into_values()
        .map(|mut bucket| {
            bucket.net = bucket.income - bucket.expenses;
            bucket
        })
        .collect()
}

/// Formats a month as a three-letter abbreviation, e.g. "Jan".
fn format_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

//! Dashboard summaries: monthly aggregation and whole-history totals.
//!
//! The functions in this module are pure and only read the transactions
//! they are given.

mod aggregation;
mod handlers;
mod stats;

pub use aggregation::{MonthlyStats, aggregate_by_month};
pub use handlers::get_summary_endpoint;
pub use stats::{
    TransactionStats, calculate_net_income, calculate_total_expenses, calculate_total_income,
};

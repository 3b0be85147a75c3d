//! HTTP handler for the dashboard summary.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    dashboard::{MonthlyStats, TransactionStats, aggregate_by_month},
    db::Database,
    transaction::list_transactions,
};

/// A month of aggregated transactions with its chart label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month's totals.
    #[serde(flatten)]
    pub stats: MonthlyStats,
    /// The chart label, e.g. "Jan 2024".
    pub label: String,
}

/// The data displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Totals over every transaction.
    pub stats: TransactionStats,
    /// Monthly totals in chronological order.
    pub monthly: Vec<MonthlySummary>,
}

impl Summary {
    fn new(stats: TransactionStats, monthly: Vec<MonthlyStats>) -> Self {
        Self {
            stats,
            monthly: monthly
                .into_iter()
                .map(|stats| MonthlySummary {
                    label: stats.label(),
                    stats,
                })
                .collect(),
        }
    }
}

/// A route handler that returns overall and per-month totals for all
/// transactions.
pub async fn get_summary_endpoint(State(database): State<Database>) -> Response {
    let transactions = match database.with_connection(list_transactions) {
        Ok(transactions) => transactions,
        Err(error) => return error.into_json_response("Failed to fetch transactions"),
    };

    let summary = Summary::new(
        TransactionStats::from_transactions(&transactions),
        aggregate_by_month(&transactions),
    );

    Json(summary).into_response()
}

//! A personal finance tracker.
//!
//! Users record income and expense transactions and view them aggregated by
//! month. This library provides a JSON REST API backed by a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod routing;
mod transaction;

pub use app_state::AppState;
pub use category::{TRANSACTION_CATEGORIES, TransactionCategories};
pub use dashboard::{
    MonthlyStats, TransactionStats, aggregate_by_month, calculate_net_income,
    calculate_total_expenses, calculate_total_income,
};
pub use database_id::TransactionId;
pub use db::{Database, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, TransactionInput, TransactionType, create_transaction,
    delete_transaction, list_transactions, update_transaction,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more of description, amount, type, category and date was
    /// omitted, null or an empty string.
    #[error("Missing required fields")]
    MissingFields,

    /// An update or delete request did not include the `id` query parameter.
    #[error("Transaction ID is required")]
    MissingTransactionId,

    /// The `id` query parameter could not be parsed as a transaction ID.
    #[error("\"{0}\" is not a valid transaction ID")]
    InvalidTransactionId(String),

    /// The description contained only whitespace.
    #[error("Description is required")]
    EmptyDescription,

    /// The description was longer than 100 characters.
    ///
    /// Holds the length of the rejected description in graphemes.
    #[error("Description must be at most 100 characters, got {0}")]
    DescriptionTooLong(usize),

    /// The amount was less than one cent, more than one trillion or not a
    /// finite number.
    #[error("Amount must be between 0.01 and 1000000000000, got {0}")]
    InvalidAmount(f64),

    /// The transaction type was something other than "income" or "expense".
    #[error("\"{0}\" is not a valid transaction type, expected \"income\" or \"expense\"")]
    InvalidTransactionType(String),

    /// The category contained only whitespace.
    #[error("Category is required")]
    EmptyCategory,

    /// The date string could not be parsed as a calendar date or RFC 3339
    /// date-time.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The request body was not a JSON object of the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidJson(String),

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// The requested resource was not found.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The database could not be opened or initialized.
    ///
    /// The error string should only be logged on the server.
    #[error("could not open the database: {0}")]
    DatabaseUnavailable(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// The HTTP status code that a client should receive for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields
            | Error::MissingTransactionId
            | Error::InvalidTransactionId(_)
            | Error::EmptyDescription
            | Error::DescriptionTooLong(_)
            | Error::InvalidAmount(_)
            | Error::InvalidTransactionType(_)
            | Error::EmptyCategory
            | Error::InvalidDate(_)
            | Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::UpdateMissingTransaction | Error::DeleteMissingTransaction | Error::NotFound => {
                StatusCode::NOT_FOUND
            }
            Error::DatabaseUnavailable(_) | Error::DatabaseLockError | Error::SqlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert the error into a JSON response of the form `{"error": "..."}`.
    ///
    /// Client errors are described to the client. Server errors are logged
    /// and replaced with `failure_message` so that internal details are not
    /// leaked.
    pub(crate) fn into_json_response(self, failure_message: &str) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::UpdateMissingTransaction
            | Error::DeleteMissingTransaction
            | Error::NotFound => "Transaction not found".to_owned(),
            error if status.is_server_error() => {
                tracing::error!("{failure_message}: {error}");
                failure_message.to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_json_response("Something went wrong, check the server logs for more details")
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::Error;

    #[test]
    fn client_errors_map_to_bad_request() {
        let errors = [
            Error::MissingFields,
            Error::MissingTransactionId,
            Error::InvalidTransactionId("abc".to_owned()),
            Error::EmptyDescription,
            Error::DescriptionTooLong(101),
            Error::InvalidAmount(0.0),
            Error::InvalidTransactionType("refund".to_owned()),
            Error::EmptyCategory,
            Error::InvalidDate("yesterday".to_owned()),
            Error::InvalidJson("expected value".to_owned()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{error:?}");
        }
    }

    #[test]
    fn missing_transactions_map_to_not_found() {
        assert_eq!(
            Error::UpdateMissingTransaction.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::DeleteMissingTransaction.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_errors_map_to_internal_server_error() {
        assert_eq!(
            Error::DatabaseUnavailable("unable to open database file".to_owned()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::DatabaseLockError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn no_rows_converts_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }
}

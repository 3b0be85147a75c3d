//! Request extraction helpers shared by the transaction endpoints.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::{Error, database_id::TransactionId, transaction::TransactionInput};

/// The query string for routes that target a single transaction,
/// e.g. `/transactions?id=42`.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionIdQuery {
    id: Option<String>,
}

impl TransactionIdQuery {
    /// Parse the `id` query parameter.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::MissingTransactionId] if `id` is absent or empty,
    /// - or [Error::InvalidTransactionId] if `id` is not an integer.
    pub fn transaction_id(&self) -> Result<TransactionId, Error> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Err(Error::MissingTransactionId),
            Some(id) => id
                .parse()
                .map_err(|_| Error::InvalidTransactionId(id.to_owned())),
        }
    }
}

/// Unwrap a JSON request body, turning extractor rejections into [Error::InvalidJson].
pub fn parse_json_body(
    payload: Result<Json<TransactionInput>, JsonRejection>,
) -> Result<TransactionInput, Error> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| Error::InvalidJson(rejection.body_text()))
}

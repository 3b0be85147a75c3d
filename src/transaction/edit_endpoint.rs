use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    db::Database,
    transaction::{
        TransactionInput,
        query::{TransactionIdQuery, parse_json_body},
        update_transaction,
    },
};

/// A route handler for replacing the fields of the transaction given by the
/// `id` query parameter.
///
/// Every field must be supplied; partial updates are not supported.
pub async fn edit_transaction_endpoint(
    State(database): State<Database>,
    Query(query): Query<TransactionIdQuery>,
    payload: Result<Json<TransactionInput>, JsonRejection>,
) -> Response {
    let result = query.transaction_id().and_then(|id| {
        let transaction = parse_json_body(payload)?.validate()?;

        database.with_connection(|connection| {
            update_transaction(id, &transaction, OffsetDateTime::now_utc(), connection)
        })?;

        Ok(id)
    });

    match result {
        Ok(id) => {
            tracing::debug!("Updated transaction {id}");
            Json(json!({ "message": "Transaction updated successfully" })).into_response()
        }
        Err(error) => error.into_json_response("Failed to update transaction"),
    }
}

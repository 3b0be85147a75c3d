use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    db::Database,
    transaction::{TransactionInput, create_transaction, query::parse_json_body},
};

/// A route handler for creating a new transaction.
///
/// Responds with `201 Created` and the new transaction's ID on success. The
/// body is validated before the database is touched.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    payload: Result<Json<TransactionInput>, JsonRejection>,
) -> Response {
    let result = parse_json_body(payload)
        .and_then(TransactionInput::validate)
        .and_then(|transaction| {
            database.with_connection(|connection| {
                create_transaction(&transaction, OffsetDateTime::now_utc(), connection)
            })
        });

    match result {
        Ok(id) => {
            tracing::debug!("Created transaction {id}");
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Transaction created successfully",
                    "id": id,
                })),
            )
                .into_response()
        }
        Err(error) => error.into_json_response("Failed to create transaction"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use time::{OffsetDateTime, macros::date};

    use crate::transaction::{
        Transaction, TransactionInput, TransactionType, count_transactions,
        test_utils::{new_test_server, transaction_input},
    };

    #[tokio::test]
    async fn create_then_list_includes_new_transaction() {
        let (server, _) = new_test_server();
        let before = OffsetDateTime::now_utc();

        let response = server
            .post("/transactions")
            .json(&transaction_input(
                "Freelance invoice #12",
                640.0,
                "income",
                "Freelance",
                "2024-01-15",
            ))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["message"], "Transaction created successfully");
        let id = body["id"].as_i64().expect("id should be an integer");

        let transactions = server.get("/transactions").await.json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 1);
        let transaction = &transactions[0];
        assert_eq!(transaction.id, id);
        assert_eq!(transaction.description, "Freelance invoice #12");
        assert_eq!(transaction.amount, 640.0);
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.category, "Freelance");
        assert_eq!(transaction.date, date!(2024 - 01 - 15));
        assert_eq!(transaction.created_at, transaction.updated_at);
        assert!(transaction.created_at >= before);
    }

    #[tokio::test]
    async fn accepts_iso_date_times() {
        let (server, _) = new_test_server();

        server
            .post("/transactions")
            .json(&transaction_input(
                "Bus pass",
                45.0,
                "expense",
                "Transportation",
                "2024-02-01T00:00:00.000Z",
            ))
            .await
            .assert_status(StatusCode::CREATED);

        let transactions = server.get("/transactions").await.json::<Vec<Transaction>>();
        assert_eq!(transactions[0].date, date!(2024 - 02 - 01));
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_writing() {
        let (server, database) = new_test_server();
        let input = TransactionInput {
            category: None,
            ..transaction_input("Coffee", 4.5, "expense", "Food & Dining", "2024-01-15")
        };

        let response = server.post("/transactions").json(&input).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Missing required fields" }));
        assert_eq!(database.with_connection(count_transactions), Ok(0));
    }

    #[tokio::test]
    async fn zero_amount_is_rejected() {
        let (server, database) = new_test_server();

        let response = server
            .post("/transactions")
            .json(&transaction_input(
                "Free sample",
                0.0,
                "expense",
                "Shopping",
                "2024-01-15",
            ))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(database.with_connection(count_transactions), Ok(0));
    }

    #[tokio::test]
    async fn invalid_date_is_rejected() {
        let (server, database) = new_test_server();

        let response = server
            .post("/transactions")
            .json(&transaction_input(
                "Cinema",
                18.0,
                "expense",
                "Entertainment",
                "next tuesday",
            ))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "\"next tuesday\" is not a valid date" }));
        assert_eq!(database.with_connection(count_transactions), Ok(0));
    }

    #[tokio::test]
    async fn wrongly_typed_body_is_rejected() {
        let (server, database) = new_test_server();

        let response = server
            .post("/transactions")
            .json(&json!({
                "description": "Cinema",
                "amount": "eighteen",
                "type": "expense",
                "category": "Entertainment",
                "date": "2024-01-15",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(database.with_connection(count_transactions), Ok(0));
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let (server, _) = new_test_server();
        let input = transaction_input("Lunch", 12.0, "expense", "Food & Dining", "2024-01-15");

        let first = server.post("/transactions").json(&input).await.json::<Value>();
        let second = server.post("/transactions").json(&input).await.json::<Value>();

        assert_ne!(first["id"], second["id"]);
    }
}

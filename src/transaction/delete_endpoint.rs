use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    db::Database,
    transaction::{delete_transaction, query::TransactionIdQuery},
};

/// A route handler for permanently deleting the transaction given by the
/// `id` query parameter.
pub async fn delete_transaction_endpoint(
    State(database): State<Database>,
    Query(query): Query<TransactionIdQuery>,
) -> Response {
    let result = query.transaction_id().and_then(|id| {
        database.with_connection(|connection| delete_transaction(id, connection))?;

        Ok(id)
    });

    match result {
        Ok(id) => {
            tracing::debug!("Deleted transaction {id}");
            Json(json!({ "message": "Transaction deleted successfully" })).into_response()
        }
        Err(error) => error.into_json_response("Failed to delete transaction"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use time::macros::{date, datetime};

    use crate::transaction::{
        NewTransaction, Transaction, TransactionType, create_transaction,
        test_utils::new_test_server,
    };

    fn create_test_transaction(description: &str, database: &crate::Database) -> i64 {
        database
            .with_connection(|connection| {
                create_transaction(
                    &NewTransaction {
                        description: description.to_owned(),
                        amount: 9.99,
                        transaction_type: TransactionType::Expense,
                        category: "Entertainment".to_owned(),
                        date: date!(2024 - 03 - 05),
                    },
                    datetime!(2024-03-05 20:00 UTC),
                    connection,
                )
            })
            .expect("could not create test transaction")
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let (server, database) = new_test_server();
        let deleted_id = create_test_transaction("Streaming subscription", &database);
        let kept_id = create_test_transaction("Concert ticket", &database);

        let response = server
            .delete("/transactions")
            .add_query_param("id", deleted_id)
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": "Transaction deleted successfully" }));
        let ids: Vec<_> = server
            .get("/transactions")
            .await
            .json::<Vec<Transaction>>()
            .into_iter()
            .map(|transaction| transaction.id)
            .collect();
        assert_eq!(ids, vec![kept_id]);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let (server, database) = new_test_server();
        let id = create_test_transaction("Streaming subscription", &database);

        server
            .delete("/transactions")
            .add_query_param("id", id)
            .await
            .assert_status_ok();
        let response = server
            .delete("/transactions")
            .add_query_param("id", id)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Transaction not found" }));
    }

    #[tokio::test]
    async fn missing_id_is_rejected() {
        let (server, _) = new_test_server();

        let response = server.delete("/transactions").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Transaction ID is required" }));
    }
}

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{db::Database, transaction::list_transactions};

/// A route handler that returns every transaction as a JSON array, most
/// recent date first.
pub async fn list_transactions_endpoint(State(database): State<Database>) -> Response {
    match database.with_connection(list_transactions) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_json_response("Failed to fetch transactions"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use time::macros::{date, datetime};

    use crate::{
        AppState, Database, build_router,
        transaction::{
            NewTransaction, Transaction, TransactionType, create_transaction,
            test_utils::new_test_server,
        },
    };

    #[tokio::test]
    async fn returns_empty_array_for_new_database() {
        let (server, _) = new_test_server();

        let response = server.get("/transactions").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn returns_transactions_newest_first() {
        let (server, database) = new_test_server();
        let created_at = datetime!(2024-03-01 12:00 UTC);
        database
            .with_connection(|connection| {
                for (description, date) in [
                    ("January rent", date!(2024 - 01 - 01)),
                    ("February rent", date!(2024 - 02 - 01)),
                ] {
                    create_transaction(
                        &NewTransaction {
                            description: description.to_owned(),
                            amount: 1500.0,
                            transaction_type: TransactionType::Expense,
                            category: "Housing".to_owned(),
                            date,
                        },
                        created_at,
                        connection,
                    )?;
                }

                Ok(())
            })
            .expect("could not create test transactions");

        let response = server.get("/transactions").await;

        response.assert_status_ok();
        let transactions = response.json::<Vec<Transaction>>();
        let descriptions: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["February rent", "January rent"]);
        assert_eq!(transactions[0].created_at, created_at);
    }

    #[tokio::test]
    async fn serializes_documents_with_expected_field_names() {
        let (server, database) = new_test_server();
        database
            .with_connection(|connection| {
                create_transaction(
                    &NewTransaction {
                        description: "Paycheck".to_owned(),
                        amount: 2500.0,
                        transaction_type: TransactionType::Income,
                        category: "Salary".to_owned(),
                        date: date!(2024 - 01 - 15),
                    },
                    datetime!(2024-01-15 08:00 UTC),
                    connection,
                )
            })
            .expect("could not create test transaction");

        let response = server.get("/transactions").await;

        response.assert_json(&json!([{
            "_id": 1,
            "description": "Paycheck",
            "amount": 2500.0,
            "type": "income",
            "category": "Salary",
            "date": "2024-01-15",
            "createdAt": "2024-01-15T08:00:00Z",
            "updatedAt": "2024-01-15T08:00:00Z",
        }]));
    }

    #[tokio::test]
    async fn unreachable_database_returns_generic_error() {
        let database = Database::open("/this/directory/does/not/exist/finance.db");
        let server = axum_test::TestServer::new(build_router(AppState::new(database)));

        let response = server.get("/transactions").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Failed to fetch transactions" }));
    }
}

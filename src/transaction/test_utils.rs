use axum_test::TestServer;

use crate::{AppState, Database, build_router, transaction::TransactionInput};

/// Create a test server backed by a fresh in-memory database.
///
/// The returned [Database] shares its connection with the server.
pub fn new_test_server() -> (TestServer, Database) {
    let database = Database::in_memory();
    let app = build_router(AppState::new(database.clone()));
    let server = TestServer::new(app);

    (server, database)
}

/// A complete, valid request body.
pub fn transaction_input(
    description: &str,
    amount: f64,
    transaction_type: &str,
    category: &str,
    date: &str,
) -> TransactionInput {
    TransactionInput {
        description: Some(description.to_owned()),
        amount: Some(amount),
        transaction_type: Some(transaction_type.to_owned()),
        category: Some(category.to_owned()),
        date: Some(date.to_owned()),
    }
}

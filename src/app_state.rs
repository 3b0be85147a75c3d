//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::db::Database;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The shared handle to the application database.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] that stores data in `database`.
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

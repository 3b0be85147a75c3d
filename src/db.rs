//! The shared database handle and schema initialization.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq)]
enum DatabaseSource {
    File(PathBuf),
    Memory,
}

impl DatabaseSource {
    fn connect(&self) -> Result<Connection, Error> {
        let connection = match self {
            DatabaseSource::File(path) => Connection::open(path),
            DatabaseSource::Memory => Connection::open_in_memory(),
        }
        .map_err(|error| Error::DatabaseUnavailable(error.to_string()))?;

        initialize(&connection).map_err(|error| match error {
            Error::SqlError(error) => Error::DatabaseUnavailable(error.to_string()),
            error => error,
        })?;

        Ok(connection)
    }
}

/// A process-wide handle to the application database.
///
/// The connection is opened and the schema initialized the first time it is
/// needed, then reused for every later operation. Cloning the handle shares
/// the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    source: DatabaseSource,
    connection: Arc<Mutex<Option<Connection>>>,
}

impl Database {
    /// Create a handle to the SQLite database at `path`.
    ///
    /// Nothing is opened until the first call to [Database::with_connection].
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            source: DatabaseSource::File(path.as_ref().to_owned()),
            connection: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a handle to a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            source: DatabaseSource::Memory,
            connection: Arc::new(Mutex::new(None)),
        }
    }

    /// Run `operation` with exclusive access to the database connection.
    ///
    /// The lock is held only for the duration of `operation`.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::DatabaseLockError] if the lock was poisoned by a panicking thread,
    /// - [Error::DatabaseUnavailable] if the database could not be opened,
    /// - or any error returned by `operation`.
    pub fn with_connection<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error>,
    {
        let mut guard = self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })?;

        if guard.is_none() {
            tracing::debug!("Opening database {:?}", self.source);
            *guard = Some(self.source.connect()?);
        }

        match guard.as_ref() {
            Some(connection) => operation(connection),
            None => Err(Error::DatabaseUnavailable(
                "connection was not initialized".to_owned(),
            )),
        }
    }
}

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction` input
//! - Database functions for storing, listing, updating and deleting transactions
//! - The JSON route handlers for the `/transactions` resource

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod query;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{
    NewTransaction, Transaction, TransactionType, create_transaction, create_transaction_table,
    delete_transaction, list_transactions, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionInput;
pub use list_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub use core::{count_transactions, get_transaction};

//! Database ID type definition.

/// Alias for the integer type used for transaction IDs.
///
/// Clients should treat the value as opaque.
pub type TransactionId = i64;

//! The API endpoints URIs.
//!
//! Routes that act on a single transaction take its ID in the `id` query
//! parameter, e.g. `/transactions?id=42`.

/// The route to list, create, update and delete transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for the catalog of suggested categories.
pub const CATEGORIES: &str = "/categories";
/// The route for overall and monthly totals.
pub const SUMMARY: &str = "/summary";

//! Database ID type definition.

/// Alias for the integer type used for mapping to expense record IDs.
pub type ExpenseId = i64;

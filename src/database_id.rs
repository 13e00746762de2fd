//! Database ID type definition.

/// Alias for the integer type used for the generated row IDs of both ledgers.
pub type DatabaseId = i64;

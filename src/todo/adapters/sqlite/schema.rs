//! Diesel schema for todo persistence.
//!
//! The table is bootstrapped at startup by [`super::ensure_schema`] rather
//! than by migration tooling; the definition here mirrors that DDL.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Storage-assigned row identifier.
        id -> BigInt,
        /// Trimmed, validated title.
        title -> Text,
        /// Completion flag stored as 0/1.
        completed -> Integer,
        /// Priority stored as its canonical lowercase text.
        priority -> Text,
        /// Creation timestamp stored as RFC 3339 text.
        #[sql_name = "createdAt"]
        created_at -> Text,
    }
}

//! Error types for statement rendering.

use thiserror::Error;

/// Reasons a statement could not be rendered.
///
/// Only the fail-closed operations (`get`, `delete`, `insert`, and
/// `escape_order_by`) reject per-field problems with an error. `update` and
/// `query` degrade to the `undefined` token instead and only fail on an
/// unknown table or an empty record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The table is not part of the schema registry.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The field is not a known field of the table.
    #[error("unknown field '{field}' for table '{table}'")]
    UnknownField {
        /// Table the field was checked against.
        table: String,
        /// The offending field name.
        field: String,
    },

    /// A record was built from something other than a key-value object.
    #[error("expected a key-value record, got {0}")]
    NotARecord(&'static str),

    /// The record has no `id` entry.
    #[error("record has no id field")]
    MissingId,

    /// The field holds no scalar value (an array or object in JSON input).
    #[error("field '{field}' has no scalar value")]
    InvalidValue {
        /// The offending field name.
        field: String,
    },

    /// The record has nothing to render.
    #[error("record has no fields to render")]
    EmptyRecord,

    /// The ORDER BY direction is not one of the accepted spellings.
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
}

/// Result type for statement rendering.
pub type Result<T> = std::result::Result<T, BuildError>;

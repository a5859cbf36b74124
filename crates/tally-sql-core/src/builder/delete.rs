//! DELETE rendering.

use tracing::debug;

use super::value::{ToSqlValue, escape_literal};
use crate::error::Result;
use crate::schema;

/// Renders `DELETE FROM <table> WHERE id=<id>;`.
///
/// The id is always quoted, so a DELETE never runs without its WHERE clause.
///
/// # Errors
///
/// Returns [`BuildError::UnknownTable`](crate::BuildError::UnknownTable) if
/// the table is not registered.
pub fn delete<V: ToSqlValue>(table: impl AsRef<str>, id: V) -> Result<String> {
    let table = schema::resolve(table.as_ref()).inspect_err(|e| debug!("delete rejected: {e}"))?;
    Ok(format!("DELETE FROM {table} WHERE id={};", escape_literal(id)))
}

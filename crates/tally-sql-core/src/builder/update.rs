//! UPDATE rendering.

use tracing::{debug, warn};

use super::value::{SqlValue, UNDEFINED, escape_literal};
use crate::error::{BuildError, Result};
use crate::record::Record;
use crate::schema::{self, Table};

/// Renders `UPDATE <table> SET <field>=<value>, ... WHERE id=<id>;`.
///
/// Every field except `id` becomes an assignment, in record order. Unlike
/// [`insert`](super::insert), unknown fields do not reject the call: if
/// any field is unknown the whole SET body renders as `undefined`. A
/// record without an `id` renders `WHERE id='undefined'`.
///
/// # Errors
///
/// - [`BuildError::UnknownTable`] if the table is not registered
/// - [`BuildError::EmptyRecord`] if the record has no field besides `id`
pub fn update(table: impl AsRef<str>, dbo: &Record) -> Result<String> {
    let table = schema::resolve(table.as_ref()).inspect_err(|e| debug!("update rejected: {e}"))?;
    if dbo.non_id_fields().next().is_none() {
        debug!(%table, "update rejected: nothing to set");
        return Err(BuildError::EmptyRecord);
    }

    let assignments = render_set(table, dbo).unwrap_or_else(|| {
        warn!(%table, "unknown field in update, rendering undefined SET clause");
        String::from(UNDEFINED)
    });
    let id = escape_literal(dbo.id().unwrap_or(&SqlValue::Undefined));

    Ok(format!("UPDATE {table} SET {assignments} WHERE id={id};"))
}

/// Renders the SET body, or `None` if any field is unknown.
fn render_set(table: Table, dbo: &Record) -> Option<String> {
    let assignments = dbo
        .non_id_fields()
        .map(|(field, value)| {
            table
                .has_field(field)
                .then(|| format!("{field}={}", value.to_sql_inline()))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(assignments.join(", "))
}

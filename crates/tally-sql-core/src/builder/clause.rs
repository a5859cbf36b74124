//! LIMIT and ORDER BY fragments appended to rendered queries.

use tracing::debug;

use super::value::{SqlValue, ToSqlValue, UNDEFINED};
use crate::error::{BuildError, Result};
use crate::schema;

/// Accepted ORDER BY directions. The spelling is echoed verbatim.
pub const SORT_DIRECTIONS: [&str; 4] = ["ASC", "DESC", "asc", "desc"];

/// Renders `LIMIT <n>`.
///
/// Accepts a non-negative integer or text holding one. Anything else
/// renders `LIMIT undefined`.
#[must_use]
pub fn escape_limit<V: ToSqlValue>(limit: V) -> String {
    let count = match limit.to_sql_value() {
        SqlValue::Int(n) => u64::try_from(n).ok(),
        SqlValue::Text(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    count.map_or_else(|| format!("LIMIT {UNDEFINED}"), |n| format!("LIMIT {n}"))
}

/// Renders `ORDER BY <field> <direction>`.
///
/// # Errors
///
/// - [`BuildError::UnknownTable`] if the table is not registered
/// - [`BuildError::UnknownField`] if the field is not in the table
/// - [`BuildError::InvalidSortDirection`] if the direction is not in
///   [`SORT_DIRECTIONS`]
pub fn escape_order_by(table: impl AsRef<str>, field: &str, direction: &str) -> Result<String> {
    let table = schema::resolve(table.as_ref())?;
    if !table.has_field(field) {
        debug!(%table, field, "order by rejected: unknown field");
        return Err(BuildError::UnknownField {
            table: table.to_string(),
            field: field.to_string(),
        });
    }
    if !SORT_DIRECTIONS.contains(&direction) {
        debug!(direction, "order by rejected: bad direction");
        return Err(BuildError::InvalidSortDirection(direction.to_string()));
    }
    Ok(format!("ORDER BY {field} {direction}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Table;
    use serde_json::json;

    #[test]
    fn test_limit_number() {
        assert_eq!(escape_limit(35), "LIMIT 35");
        assert_eq!(escape_limit(0_i64), "LIMIT 0");
    }

    #[test]
    fn test_limit_text() {
        assert_eq!(escape_limit("22"), "LIMIT 22");
    }

    #[test]
    fn test_limit_rejects_other_values() {
        assert_eq!(escape_limit(json!({})), "LIMIT undefined");
        assert_eq!(escape_limit("ten"), "LIMIT undefined");
        assert_eq!(escape_limit(-1), "LIMIT undefined");
        assert_eq!(escape_limit(1.5), "LIMIT undefined");
        assert_eq!(escape_limit("5; DROP TABLE user"), "LIMIT undefined");
    }

    #[test]
    fn test_order_by_directions() {
        for direction in SORT_DIRECTIONS {
            assert_eq!(
                escape_order_by(Table::User, "username", direction).unwrap(),
                format!("ORDER BY username {direction}")
            );
        }
    }

    #[test]
    fn test_order_by_invalid_field() {
        assert!(matches!(
            escape_order_by(Table::User, "carsonizfly", "ASC"),
            Err(BuildError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_order_by_invalid_table() {
        assert!(matches!(
            escape_order_by("michaelisbetterthancarson", "username", "ASC"),
            Err(BuildError::UnknownTable(_))
        ));
    }

    #[test]
    fn test_order_by_invalid_direction() {
        assert_eq!(
            escape_order_by(Table::User, "username", "blah"),
            Err(BuildError::InvalidSortDirection(String::from("blah")))
        );
        assert!(escape_order_by(Table::User, "username", "Asc").is_err());
    }
}

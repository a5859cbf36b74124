//! INSERT rendering.
//!
//! Inserts are all-or-nothing: any problem with the table or the record
//! rejects the whole statement.

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::record::Record;
use crate::schema::{self, fields::ID};

/// Renders `INSERT INTO <table> (id, ...) VALUES (<id>, ...);`.
///
/// Columns are `id` followed by every other field of the record in
/// insertion order. Text values are quoted, numbers and booleans are bare.
///
/// ```rust
/// use tally_sql_core::{Record, builder::insert};
///
/// let dbo = Record::new().with("id", "u1").with("netVotes", 3);
/// assert_eq!(
///     insert("user", &dbo).unwrap(),
///     "INSERT INTO user (id, netVotes) VALUES ('u1', 3);"
/// );
/// ```
///
/// # Errors
///
/// - [`BuildError::UnknownTable`] if the table is not registered
/// - [`BuildError::MissingId`] if the record has no `id`, or an `id` with
///   no scalar value
/// - [`BuildError::UnknownField`] if any other field is not in the table
/// - [`BuildError::InvalidValue`] if any other field has no scalar value
pub fn insert(table: impl AsRef<str>, dbo: &Record) -> Result<String> {
    render(table.as_ref(), dbo).inspect_err(|e| debug!("insert rejected: {e}"))
}

fn render(table: &str, dbo: &Record) -> Result<String> {
    let table = schema::resolve(table)?;
    let id = dbo
        .id()
        .filter(|id| !id.is_undefined())
        .ok_or(BuildError::MissingId)?;

    let mut columns = vec![ID];
    let mut values = vec![id.to_sql_inline()];
    for (field, value) in dbo.non_id_fields() {
        if !table.has_field(field) {
            return Err(BuildError::UnknownField {
                table: table.to_string(),
                field: field.to_string(),
            });
        }
        if value.is_undefined() {
            return Err(BuildError::InvalidValue {
                field: field.to_string(),
            });
        }
        columns.push(field);
        values.push(value.to_sql_inline());
    }

    Ok(format!(
        "INSERT INTO {table} ({}) VALUES ({});",
        columns.join(", "),
        values.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Table;
    use serde_json::json;

    fn phil() -> Record {
        Record::new()
            .with("id", "qbi1")
            .with("username", "PhilPickle")
            .with("netVotes", 15)
            .with("totalUpvotes", 30)
            .with("totalDownvotes", 15)
    }

    #[test]
    fn test_simple_insert() {
        assert_eq!(
            insert(Table::User, &phil()).unwrap(),
            "INSERT INTO user (id, username, netVotes, totalUpvotes, totalDownvotes) \
             VALUES ('qbi1', 'PhilPickle', 15, 30, 15);"
        );
    }

    #[test]
    fn test_id_is_always_first() {
        let dbo = Record::new()
            .with("username", "PhilPickle")
            .with("id", "qbi4");
        assert_eq!(
            insert(Table::User, &dbo).unwrap(),
            "INSERT INTO user (id, username) VALUES ('qbi4', 'PhilPickle');"
        );
    }

    #[test]
    fn test_id_only() {
        let dbo = Record::new().with("id", "s1");
        assert_eq!(
            insert("saved", &dbo).unwrap(),
            "INSERT INTO saved (id) VALUES ('s1');"
        );
    }

    #[test]
    fn test_insert_unknown_table() {
        let dbo = Record::new().with("id", "qbi2").with("username", "PhilPickle");
        assert_eq!(
            insert("aFakeTable", &dbo),
            Err(BuildError::UnknownTable(String::from("aFakeTable")))
        );
    }

    #[test]
    fn test_insert_unknown_field() {
        let dbo = Record::new()
            .with("id", "qbi3")
            .with("username", "PhilPickle")
            .with("michaelWritesSickTests", 15);
        assert_eq!(
            insert(Table::User, &dbo),
            Err(BuildError::UnknownField {
                table: String::from("user"),
                field: String::from("michaelWritesSickTests"),
            })
        );
    }

    #[test]
    fn test_insert_missing_id() {
        let dbo = Record::new().with("username", "PhilPickle");
        assert_eq!(insert(Table::User, &dbo), Err(BuildError::MissingId));
        assert_eq!(insert(Table::User, &Record::new()), Err(BuildError::MissingId));
    }

    #[test]
    fn test_insert_boolean_is_bare() {
        let dbo = Record::new()
            .with("id", "v1")
            .with("userId", "u1")
            .with("isUpvote", true);
        assert_eq!(
            insert(Table::Vote, &dbo).unwrap(),
            "INSERT INTO vote (id, userId, isUpvote) VALUES ('v1', 'u1', true);"
        );
    }

    #[test]
    fn test_insert_rejects_structured_id() {
        let dbo = Record::from_json(json!({"id": {"x": 1}, "username": "p"})).unwrap();
        assert_eq!(insert(Table::User, &dbo), Err(BuildError::MissingId));
    }

    #[test]
    fn test_insert_rejects_structured_field() {
        let dbo = Record::from_json(json!({"id": "a", "username": {"x": 1}})).unwrap();
        assert_eq!(
            insert(Table::User, &dbo),
            Err(BuildError::InvalidValue {
                field: String::from("username"),
            })
        );

        let dbo = Record::new().with("id", "a").with("netVotes", json!([1, 2]));
        assert_eq!(
            insert(Table::User, &dbo),
            Err(BuildError::InvalidValue {
                field: String::from("netVotes"),
            })
        );
    }

    #[test]
    fn test_insert_null_is_kept() {
        let dbo = Record::new().with("id", "a").with("username", None::<&str>);
        assert_eq!(
            insert(Table::User, &dbo).unwrap(),
            "INSERT INTO user (id, username) VALUES ('a', null);"
        );
    }
}

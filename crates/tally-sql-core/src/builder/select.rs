//! SELECT rendering: lookup by id and multi-condition queries.

use tracing::{debug, warn};

use super::condition::Condition;
use super::value::{ToSqlValue, UNDEFINED, escape_literal};
use crate::error::Result;
use crate::schema::{self, Table};

/// Renders `SELECT * FROM <table> WHERE id=<id>;`.
///
/// # Errors
///
/// Returns [`BuildError::UnknownTable`](crate::BuildError::UnknownTable) if
/// the table is not registered.
pub fn get<V: ToSqlValue>(table: impl AsRef<str>, id: V) -> Result<String> {
    let table = schema::resolve(table.as_ref()).inspect_err(|e| debug!("get rejected: {e}"))?;
    Ok(format!(
        "SELECT * FROM {table} WHERE id={};",
        escape_literal(id)
    ))
}

/// Renders a SELECT over a flat chain of conditions.
///
/// With no conditions the statement has no WHERE clause. Otherwise the
/// conditions are joined left to right, each preceded by its own connective;
/// the first condition's connective is dropped.
///
/// Malformed input degrades instead of failing:
/// - an absent entry turns the whole WHERE body into `undefined`
/// - a missing or unknown field renders `undefined` in the field slot
/// - a missing connective renders `undefined` in the joining slot
///
/// The statement carries no trailing semicolon so that ORDER BY and LIMIT
/// fragments can be appended.
///
/// ```rust
/// use tally_sql_core::builder::{Condition, query};
///
/// let conditions = [
///     Condition::eq("netVotes", 55),
///     Condition::gte("totalUpvotes", 65).or(),
/// ];
/// assert_eq!(
///     query("user", &conditions).unwrap(),
///     "SELECT * FROM user WHERE netVotes = 55 OR totalUpvotes >= 65"
/// );
/// ```
///
/// # Errors
///
/// Returns [`BuildError::UnknownTable`](crate::BuildError::UnknownTable) if
/// the table is not registered.
pub fn query<'a, I>(table: impl AsRef<str>, conditions: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Condition>>,
{
    let table = schema::resolve(table.as_ref()).inspect_err(|e| debug!("query rejected: {e}"))?;
    let conditions: Vec<Option<&Condition>> = conditions.into_iter().map(Into::into).collect();

    if conditions.is_empty() {
        return Ok(format!("SELECT * FROM {table}"));
    }

    let body = render_where(table, &conditions).unwrap_or_else(|| {
        warn!(%table, "absent condition in query, rendering undefined WHERE clause");
        String::from(UNDEFINED)
    });
    Ok(format!("SELECT * FROM {table} WHERE {body}"))
}

/// Renders the WHERE body, or `None` if any entry is absent.
fn render_where(table: Table, conditions: &[Option<&Condition>]) -> Option<String> {
    let mut body = String::new();
    for (i, cond) in conditions.iter().enumerate() {
        let cond = (*cond)?;
        if i > 0 {
            body.push(' ');
            body.push_str(&cond.connective_token());
            body.push(' ');
        }
        if cond.resolved_field(table).is_none() {
            warn!(%table, field = ?cond.field, "condition field not in table");
        }
        body.push_str(&cond.render(table));
    }
    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::condition::{CompareOp, Connective};
    use crate::error::BuildError;

    fn user_cond(field: &str, op: CompareOp, value: i64, connective: Connective) -> Condition {
        Condition::new(Table::User, field, op, value, connective)
    }

    #[test]
    fn test_get_known_table() {
        assert_eq!(
            get(Table::User, "qbg1").unwrap(),
            "SELECT * FROM user WHERE id='qbg1';"
        );
        assert_eq!(
            get("vote", "v1").unwrap(),
            "SELECT * FROM vote WHERE id='v1';"
        );
    }

    #[test]
    fn test_get_unknown_table() {
        assert_eq!(
            get("neat", "qbg2"),
            Err(BuildError::UnknownTable(String::from("neat")))
        );
    }

    #[test]
    fn test_query_without_conditions() {
        let none: [Condition; 0] = [];
        assert_eq!(query(Table::User, &none).unwrap(), "SELECT * FROM user");
    }

    #[test]
    fn test_query_joins_with_following_connective() {
        let conditions = [
            user_cond("netVotes", CompareOp::Eq, 55, Connective::And),
            user_cond("totalUpvotes", CompareOp::Eq, 65, Connective::And),
            user_cond("totalDownvotes", CompareOp::Eq, 65, Connective::And),
            user_cond("totalDownvotes", CompareOp::Eq, 65, Connective::Or),
        ];
        assert_eq!(
            query(Table::User, &conditions).unwrap(),
            "SELECT * FROM user WHERE netVotes = 55 AND totalUpvotes = 65 \
             AND totalDownvotes = 65 OR totalDownvotes = 65"
        );
    }

    #[test]
    fn test_query_first_connective_dropped() {
        let conditions = [user_cond("netVotes", CompareOp::Lte, 1, Connective::Or)];
        assert_eq!(
            query(Table::User, &conditions).unwrap(),
            "SELECT * FROM user WHERE netVotes <= 1"
        );
    }

    #[test]
    fn test_query_absent_entry() {
        let first = user_cond("netVotes", CompareOp::Eq, 55, Connective::And);
        let conditions = [Some(&first), None];
        assert_eq!(
            query(Table::User, conditions).unwrap(),
            "SELECT * FROM user WHERE undefined"
        );
    }

    #[test]
    fn test_query_unknown_table() {
        let none: [Condition; 0] = [];
        assert!(matches!(
            query("michaelisbetterthancarson", &none),
            Err(BuildError::UnknownTable(_))
        ));
    }

    #[test]
    fn test_query_text_values_are_quoted() {
        let conditions = [Condition::eq("username", "PhilPickle")];
        assert_eq!(
            query(Table::User, &conditions).unwrap(),
            "SELECT * FROM user WHERE username = 'PhilPickle'"
        );
    }
}

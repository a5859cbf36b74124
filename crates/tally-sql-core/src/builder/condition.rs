//! Filter conditions for multi-condition SELECT queries.
//!
//! A query's conditions form a flat left-to-right chain, not a tree. Each
//! condition carries the connective that joins it to the condition before
//! it, so the first condition's connective is never rendered.

use std::fmt;

use serde::Deserialize;

use super::value::{SqlValue, ToSqlValue, UNDEFINED};
use crate::schema::Table;

/// Comparison operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum CompareOp {
    /// Equal (=)
    #[default]
    #[serde(rename = "=", alias = "eq")]
    Eq,
    /// Not equal (!=)
    #[serde(rename = "!=", alias = "ne")]
    Ne,
    /// Greater than (>)
    #[serde(rename = ">", alias = "gt")]
    Gt,
    /// Greater than or equal (>=)
    #[serde(rename = ">=", alias = "gte")]
    Gte,
    /// Less than (<)
    #[serde(rename = "<", alias = "lt")]
    Lt,
    /// Less than or equal (<=)
    #[serde(rename = "<=", alias = "lte")]
    Lte,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Ne => write!(f, "!="),
            Self::Gt => write!(f, ">"),
            Self::Gte => write!(f, ">="),
            Self::Lt => write!(f, "<"),
            Self::Lte => write!(f, "<="),
        }
    }
}

/// Boolean connective joining a condition to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Connective {
    #[serde(rename = "AND", alias = "and")]
    And,
    #[serde(rename = "OR", alias = "or")]
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

/// One filter condition: `<field> <op> <value>`.
///
/// Every part is optional so that partially filled conditions still render.
/// `Condition::default()` renders as `undefined = null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// Table the field belongs to. `None` means the queried table.
    pub table: Option<String>,
    /// Field name.
    pub field: Option<String>,
    /// Comparison operator.
    pub op: CompareOp,
    /// Right-hand value.
    pub value: SqlValue,
    /// Connective placed before this condition.
    pub connective: Option<Connective>,
}

impl Condition {
    /// Creates a fully specified condition.
    #[must_use]
    pub fn new<V: ToSqlValue>(
        table: impl AsRef<str>,
        field: &str,
        op: CompareOp,
        value: V,
        connective: Connective,
    ) -> Self {
        Self {
            table: Some(String::from(table.as_ref())),
            field: Some(String::from(field)),
            op,
            value: value.to_sql_value(),
            connective: Some(connective),
        }
    }

    /// Creates an equality condition on the queried table.
    #[must_use]
    pub fn eq<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    /// Creates a greater-than-or-equal condition on the queried table.
    #[must_use]
    pub fn gte<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::compare(field, CompareOp::Gte, value)
    }

    /// Creates a less-than-or-equal condition on the queried table.
    #[must_use]
    pub fn lte<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::compare(field, CompareOp::Lte, value)
    }

    fn compare<V: ToSqlValue>(field: &str, op: CompareOp, value: V) -> Self {
        Self {
            table: None,
            field: Some(String::from(field)),
            op,
            value: value.to_sql_value(),
            connective: Some(Connective::And),
        }
    }

    /// Sets the connective to AND.
    #[must_use]
    pub const fn and(mut self) -> Self {
        self.connective = Some(Connective::And);
        self
    }

    /// Sets the connective to OR.
    #[must_use]
    pub const fn or(mut self) -> Self {
        self.connective = Some(Connective::Or);
        self
    }

    /// Returns the field if it names a field of `table`.
    ///
    /// A condition bound to a different table never resolves.
    pub(crate) fn resolved_field(&self, table: Table) -> Option<&str> {
        if self.table.as_deref().is_some_and(|t| t != table.name()) {
            return None;
        }
        self.field.as_deref().filter(|f| table.has_field(f))
    }

    /// Renders `<field> <op> <value>` against `table`.
    pub(crate) fn render(&self, table: Table) -> String {
        let field = self.resolved_field(table).unwrap_or(UNDEFINED);
        format!("{field} {} {}", self.op, self.value.to_sql_inline())
    }

    /// Renders the connective token, or `undefined` when unset.
    pub(crate) fn connective_token(&self) -> String {
        self.connective
            .map_or_else(|| String::from(UNDEFINED), |c| c.to_string())
    }
}

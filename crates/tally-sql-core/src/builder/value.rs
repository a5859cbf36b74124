//! SQL values and literal quoting.
//!
//! Quoting here is formatting only. Values are wrapped in single quotes
//! verbatim: embedded quotes, semicolons and whole statements pass through
//! untouched. Callers must hand in trusted or pre-sanitized values.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Text rendered wherever a value or clause is missing or malformed.
pub const UNDEFINED: &str = "undefined";

/// A value that can appear in a rendered statement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum SqlValue {
    /// Missing or malformed input. Renders as `undefined`.
    Undefined,
    /// NULL value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl SqlValue {
    /// Returns the representation used in value positions.
    ///
    /// Text is quoted, everything else is written bare.
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }

    /// Returns true for numeric values.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns true for [`SqlValue::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

/// The plain string form, before any quoting.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str(UNDEFINED),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Wraps the string form of `value` in single quotes.
///
/// Never fails: numbers are stringified first and [`SqlValue::Undefined`]
/// becomes `'undefined'`.
///
/// ```rust
/// use tally_sql_core::builder::escape_literal;
///
/// assert_eq!(escape_literal("qbd1"), "'qbd1'");
/// assert_eq!(escape_literal(35), "'35'");
/// assert_eq!(escape_literal(";DROP TABLE user;"), "';DROP TABLE user;'");
/// ```
#[must_use]
pub fn escape_literal<T: ToSqlValue>(value: T) -> String {
    format!("'{}'", value.to_sql_value())
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for &SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self.clone()
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}

impl ToSqlValue for Value {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::from(self)
    }
}

/// Arrays and objects have no scalar form and become `Undefined`.
impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| n.as_f64().map_or(Self::Undefined, Self::Float), Self::Int),
            Value::String(s) => Self::Text(s),
            Value::Array(_) | Value::Object(_) => Self::Undefined,
        }
    }
}

//! Records to persist (DBOs).
//!
//! A [`Record`] is an ordered field → value map. Field order is insertion
//! order and decides the column order of rendered INSERT and UPDATE
//! statements. Records coming from JSON are checked at the boundary: only
//! objects are accepted.

use indexmap::IndexMap;
use serde_json::Value;

use crate::builder::value::{SqlValue, ToSqlValue};
use crate::error::{BuildError, Result};
use crate::schema::fields::ID;

/// An insertion-ordered mapping from field name to value.
///
/// Equality compares fields and values, not their order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: IndexMap<String, SqlValue>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with<V: ToSqlValue>(mut self, field: &str, value: V) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field. An existing field keeps its position.
    pub fn set<V: ToSqlValue>(&mut self, field: &str, value: V) {
        self.entries.insert(String::from(field), value.to_sql_value());
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SqlValue> {
        self.entries.get(field)
    }

    /// Returns the `id` value.
    #[must_use]
    pub fn id(&self) -> Option<&SqlValue> {
        self.get(ID)
    }

    /// Iterates over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over every field except `id`, in insertion order.
    pub fn non_id_fields(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.iter().filter(|(name, _)| *name != ID)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NotARecord`] for anything but a JSON object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(field, value)| (field, SqlValue::from(value)))
                .collect()),
            Value::Array(_) => Err(BuildError::NotARecord("an array")),
            Value::String(_) => Err(BuildError::NotARecord("a string")),
            Value::Number(_) => Err(BuildError::NotARecord("a number")),
            Value::Bool(_) => Err(BuildError::NotARecord("a boolean")),
            Value::Null => Err(BuildError::NotARecord("null")),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = BuildError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl<K: AsRef<str>, V: ToSqlValue> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (field, value) in iter {
            record.set(field.as_ref(), value);
        }
        record
    }
}

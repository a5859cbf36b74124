//! # tally-sql-core
//!
//! Schema-checked SQL statement rendering for the tally voting site.
//!
//! This crate provides:
//! - A fixed schema registry of tables and their fields
//! - Renderers for SELECT, INSERT, UPDATE and DELETE statements
//! - LIMIT and ORDER BY fragments for list queries
//! - Random row id generation
//!
//! ## Rendering statements
//!
//! ```rust
//! use tally_sql_core::builder::{Condition, insert, query};
//! use tally_sql_core::{Record, Table};
//!
//! let dbo = Record::new()
//!     .with("id", "qbi1")
//!     .with("username", "PhilPickle")
//!     .with("netVotes", 15);
//! assert_eq!(
//!     insert(Table::User, &dbo).unwrap(),
//!     "INSERT INTO user (id, username, netVotes) VALUES ('qbi1', 'PhilPickle', 15);"
//! );
//!
//! let conditions = [Condition::gte("netVotes", 10), Condition::lte("netVotes", 20)];
//! assert_eq!(
//!     query(Table::User, &conditions).unwrap(),
//!     "SELECT * FROM user WHERE netVotes >= 10 AND netVotes <= 20"
//! );
//! ```
//!
//! ## Quoting is not sanitizing
//!
//! Values are wrapped in single quotes verbatim. Embedded quotes and
//! semicolons are not escaped, so callers must pass trusted values:
//!
//! ```rust
//! use tally_sql_core::builder::escape_literal;
//!
//! assert_eq!(escape_literal(";SELECT * FROM user;"), "';SELECT * FROM user;'");
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod record;
pub mod schema;

pub use builder::{
    CompareOp, Condition, Connective, SqlValue, ToSqlValue, delete, escape_limit, escape_literal,
    escape_order_by, get, insert, query, update,
};
pub use error::{BuildError, Result};
pub use record::Record;
pub use schema::{Table, field_exists, table_exists};

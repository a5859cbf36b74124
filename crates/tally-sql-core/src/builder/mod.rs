//! Statement Builder
//!
//! Renders complete SQL statements for the tables in the schema registry.
//! Two failure policies coexist:
//!
//! - fail-closed: [`get`], [`delete`], [`insert`] and [`escape_order_by`]
//!   return an error and never a partial statement
//! - fail-open: [`update`] and [`query`] render the `undefined` token in
//!   place of the malformed part
//!
//! # Example
//!
//! ```rust
//! use tally_sql_core::builder::{delete, get};
//! use tally_sql_core::Table;
//!
//! assert_eq!(
//!     get(Table::User, "qbg1").unwrap(),
//!     "SELECT * FROM user WHERE id='qbg1';"
//! );
//! assert!(delete("neat", "qbd2").is_err());
//! ```

mod clause;
pub mod condition;
mod delete;
mod insert;
mod select;
mod update;
pub mod value;

pub use clause::{SORT_DIRECTIONS, escape_limit, escape_order_by};
pub use condition::{CompareOp, Condition, Connective};
pub use delete::delete;
pub use insert::insert;
pub use select::{get, query};
pub use update::update;
pub use value::{SqlValue, ToSqlValue, UNDEFINED, escape_literal};

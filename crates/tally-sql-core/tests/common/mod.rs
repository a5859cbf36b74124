#![allow(dead_code)]

use tally_sql_core::builder::{CompareOp, Condition, Connective};
use tally_sql_core::schema::fields::{NET_VOTES, TOTAL_DOWNVOTES, TOTAL_UPVOTES};
use tally_sql_core::{Record, Table};

/// The user row used throughout the builder tests.
pub fn phil(id: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("username", "PhilPickle")
        .with(NET_VOTES, 15)
        .with(TOTAL_UPVOTES, 30)
        .with(TOTAL_DOWNVOTES, 15)
}

/// A condition on the user table.
pub fn user_cond(field: &str, op: CompareOp, value: i64, connective: Connective) -> Condition {
    Condition::new(Table::User, field, op, value, connective)
}

pub fn net_votes_eq_55() -> Condition {
    user_cond(NET_VOTES, CompareOp::Eq, 55, Connective::And)
}

pub fn upvotes_gte_65(connective: Connective) -> Condition {
    user_cond(TOTAL_UPVOTES, CompareOp::Gte, 65, connective)
}

pub fn downvotes_lte_65(connective: Connective) -> Condition {
    user_cond(TOTAL_DOWNVOTES, CompareOp::Lte, 65, connective)
}

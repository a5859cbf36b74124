//! Schema registry: the fixed set of tables and their known fields.
//!
//! The registry is compiled in. Every table lists `id` first, followed by
//! the remaining columns in declaration order.

use std::fmt;
use std::str::FromStr;

use crate::error::{BuildError, Result};

/// Field name constants shared by the tables below.
pub mod fields {
    pub const ID: &str = "id";
    pub const USERNAME: &str = "username";
    pub const NET_VOTES: &str = "netVotes";
    pub const TOTAL_UPVOTES: &str = "totalUpvotes";
    pub const TOTAL_DOWNVOTES: &str = "totalDownvotes";
    pub const USER_ID: &str = "userId";
    pub const POST_ID: &str = "postId";
    pub const ITEM_ID: &str = "itemId";
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";
    pub const CONTENT_TYPE: &str = "contentType";
    pub const TIMESTAMP: &str = "timestamp";
    pub const IS_UPVOTE: &str = "isUpvote";
}

use fields::{
    CONTENT, CONTENT_TYPE, ID, IS_UPVOTE, ITEM_ID, NET_VOTES, POST_ID, TIMESTAMP, TITLE,
    TOTAL_DOWNVOTES, TOTAL_UPVOTES, USERNAME, USER_ID,
};

/// A table known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    User,
    Post,
    Comment,
    Vote,
    Subscription,
    Saved,
}

impl Table {
    /// Every registered table.
    pub const ALL: &'static [Self] = &[
        Self::User,
        Self::Post,
        Self::Comment,
        Self::Vote,
        Self::Subscription,
        Self::Saved,
    ];

    /// The SQL table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Vote => "vote",
            Self::Subscription => "subscription",
            Self::Saved => "saved",
        }
    }

    /// The known fields of this table, `id` first.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::User => &[ID, USERNAME, NET_VOTES, TOTAL_UPVOTES, TOTAL_DOWNVOTES],
            Self::Post => &[
                ID,
                USER_ID,
                TITLE,
                CONTENT,
                NET_VOTES,
                TOTAL_UPVOTES,
                TOTAL_DOWNVOTES,
                TIMESTAMP,
            ],
            Self::Comment => &[
                ID,
                USER_ID,
                POST_ID,
                CONTENT,
                NET_VOTES,
                TOTAL_UPVOTES,
                TOTAL_DOWNVOTES,
                TIMESTAMP,
            ],
            Self::Vote => &[ID, USER_ID, ITEM_ID, CONTENT_TYPE, IS_UPVOTE],
            Self::Subscription | Self::Saved => &[ID, USER_ID, ITEM_ID, CONTENT_TYPE],
        }
    }

    /// Looks a table up by its SQL name. Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Returns true if `field` is one of this table's fields.
    #[must_use]
    pub fn has_field(self, field: &str) -> bool {
        self.fields().contains(&field)
    }
}

impl AsRef<str> for Table {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}

/// Resolves a table name against the registry.
///
/// # Errors
///
/// Returns [`BuildError::UnknownTable`] if the name is not registered.
pub fn resolve(name: &str) -> Result<Table> {
    Table::from_name(name).ok_or_else(|| BuildError::UnknownTable(name.to_string()))
}

/// Returns true if `table` names a registered table.
#[must_use]
pub fn table_exists(table: &str) -> bool {
    Table::from_name(table).is_some()
}

/// Returns true if `table` is registered and `field` is one of its fields.
#[must_use]
pub fn field_exists(table: &str, field: &str) -> bool {
    Table::from_name(table).is_some_and(|t| t.has_field(field))
}

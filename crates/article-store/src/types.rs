//! Core article types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of an article.
///
/// Identifiers are assigned densely from 0 in creation order and stay bound
/// to the same article for the lifetime of the store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(u64);

impl ArticleId {
    /// The first identifier a fresh store hands out.
    pub const FIRST: Self = Self(0);

    /// Create an `ArticleId` from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub(crate) fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArticleId({})", self.0)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArticleId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl From<u64> for ArticleId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// An article record.
///
/// Missing text fields deserialize as empty strings. The `deleted` flag is
/// never serialized and never read from input, so clients cannot observe or
/// set it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(skip)]
    pub deleted: bool,
}

impl Article {
    /// Create a live article from its three text fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: content.into(),
            deleted: false,
        }
    }

    /// Overwrite every text field with the ones from `other`.
    ///
    /// The deletion flag of `self` is kept.
    pub fn replace_fields(&mut self, other: Article) {
        self.title = other.title;
        self.description = other.description;
        self.content = other.content;
    }
}

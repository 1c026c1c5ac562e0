//! Common type definitions.
//!
//! Articles and comments use datastore-assigned integer keys; topics and users are
//! keyed by their natural string identifiers (slug and username).

use std::fmt;
use std::str::FromStr;

// Type aliases for IDs
pub type ArticleId = i32;
pub type CommentId = i32;
pub type Username = String;
pub type TopicSlug = String;

/// Columns an article listing can be ordered by.
///
/// The SQL column name is chosen from this closed set, so a sort key never reaches
/// the query text as raw user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    CreatedAt,
    Title,
    Topic,
    Author,
    Votes,
    CommentCount,
}

impl SortBy {
    pub fn column(self) -> &'static str {
        match self {
            SortBy::CreatedAt => "articles.created_at",
            SortBy::Title => "articles.title",
            SortBy::Topic => "articles.topic",
            SortBy::Author => "articles.author",
            SortBy::Votes => "articles.votes",
            SortBy::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortBy::CreatedAt),
            "title" => Ok(SortBy::Title),
            "topic" => Ok(SortBy::Topic),
            "author" => Ok(SortBy::Author),
            "votes" => Ok(SortBy::Votes),
            "comment_count" => Ok(SortBy::CommentCount),
            _ => Err(()),
        }
    }
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

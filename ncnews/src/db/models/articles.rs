//! Database models for articles.

use crate::types::{ArticleId, SortBy, SortOrder};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a new article
#[derive(Debug, Clone)]
pub struct ArticleCreateDBRequest {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
}

/// Database request for a relative change to an article's vote count
#[derive(Debug, Clone, Copy)]
pub struct ArticleVoteDBRequest {
    pub inc_votes: i32,
}

/// Database response for an article, including the live comment count
#[derive(Debug, Clone, FromRow)]
pub struct ArticleDBResponse {
    pub article_id: ArticleId,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i32,
}

/// Filter for listing articles
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

//! Database models for comments.

use crate::types::{ArticleId, CommentId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a new comment
#[derive(Debug, Clone)]
pub struct CommentCreateDBRequest {
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
}

/// Database request for a relative change to a comment's vote count
#[derive(Debug, Clone, Copy)]
pub struct CommentVoteDBRequest {
    pub inc_votes: i32,
}

/// Database response for a comment
#[derive(Debug, Clone, FromRow)]
pub struct CommentDBResponse {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Filter for listing comments: all comments on one article
#[derive(Debug, Clone, Copy)]
pub struct CommentFilter {
    pub article_id: ArticleId,
}

impl CommentFilter {
    pub fn for_article(article_id: ArticleId) -> Self {
        Self { article_id }
    }
}

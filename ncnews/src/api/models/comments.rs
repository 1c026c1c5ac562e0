//! API request/response models for comments.

use crate::db::models::comments::CommentDBResponse;
use crate::types::{ArticleId, CommentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for posting a comment on an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CommentCreate {
    /// Author of the comment; must be an existing user
    #[schema(example = "butter_bridge")]
    pub username: Option<String>,
    #[schema(example = "this is a test comment")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<CommentDBResponse> for CommentResponse {
    fn from(db: CommentDBResponse) -> Self {
        Self {
            comment_id: db.comment_id,
            article_id: db.article_id,
            author: db.author,
            body: db.body,
            votes: db.votes,
            created_at: db.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentEnvelope {
    pub comment: CommentResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentsEnvelope {
    pub comments: Vec<CommentResponse>,
}

//! API request/response models for articles.

use crate::db::models::articles::ArticleDBResponse;
use crate::errors::Error;
use crate::types::{ArticleId, SortBy, SortOrder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing articles
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListArticlesQuery {
    /// Column to sort by: created_at, title, topic, author, votes or comment_count
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc
    pub order: Option<String>,

    /// Only return articles with this topic
    pub topic: Option<String>,
}

impl ListArticlesQuery {
    /// Resolve the sort key and direction, checking `sort_by` before `order`.
    pub fn sorting(&self) -> Result<(SortBy, SortOrder), Error> {
        let sort_by = match self.sort_by.as_deref() {
            None => SortBy::default(),
            Some(raw) => raw.parse().map_err(|_| Error::bad_request("Bad Sort Request"))?,
        };
        let order = match self.order.as_deref() {
            None => SortOrder::default(),
            Some(raw) => raw.parse().map_err(|_| Error::bad_request("Bad Order Request"))?,
        };
        Ok((sort_by, order))
    }
}

/// Request body for creating an article. Every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ArticleCreate {
    #[schema(example = "rogersop")]
    pub author: Option<String>,
    #[schema(example = "test-title")]
    pub title: Option<String>,
    #[schema(example = "dont rest on your lorems")]
    pub body: Option<String>,
    #[schema(example = "paper")]
    pub topic: Option<String>,
}

/// Full article, including its body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article_id: ArticleId,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    /// Number of comments currently on the article
    pub comment_count: i32,
}

impl From<ArticleDBResponse> for ArticleResponse {
    fn from(db: ArticleDBResponse) -> Self {
        Self {
            article_id: db.article_id,
            author: db.author,
            title: db.title,
            body: db.body,
            topic: db.topic,
            created_at: db.created_at,
            votes: db.votes,
            comment_count: db.comment_count,
        }
    }
}

/// Article as it appears in listings: everything except the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryResponse {
    pub article_id: ArticleId,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i32,
}

impl From<ArticleDBResponse> for ArticleSummaryResponse {
    fn from(db: ArticleDBResponse) -> Self {
        Self {
            article_id: db.article_id,
            author: db.author,
            title: db.title,
            topic: db.topic,
            created_at: db.created_at,
            votes: db.votes,
            comment_count: db.comment_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticlesEnvelope {
    pub articles: Vec<ArticleSummaryResponse>,
}

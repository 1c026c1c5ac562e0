//! Database models for topics.

use sqlx::FromRow;

/// Database request for creating a new topic
#[derive(Debug, Clone)]
pub struct TopicCreateDBRequest {
    pub slug: String,
    pub description: String,
}

/// Database response for a topic
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TopicDBResponse {
    pub slug: String,
    pub description: String,
}

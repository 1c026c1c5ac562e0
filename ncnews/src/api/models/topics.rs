//! API request/response models for topics.

use crate::db::models::topics::TopicDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TopicCreate {
    /// Unique identifier for the topic
    #[schema(example = "coding")]
    pub slug: Option<String>,
    #[schema(example = "Code is love, code is life")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub slug: String,
    pub description: String,
}

impl From<TopicDBResponse> for TopicResponse {
    fn from(db: TopicDBResponse) -> Self {
        Self {
            slug: db.slug,
            description: db.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicEnvelope {
    pub topic: TopicResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicsEnvelope {
    pub topics: Vec<TopicResponse>,
}

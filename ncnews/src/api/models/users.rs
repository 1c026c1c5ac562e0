//! API response models for users.

use crate::db::models::users::UserDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "butter_bridge")]
    pub username: String,
    #[schema(example = "jonny")]
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<UserDBResponse> for UserResponse {
    fn from(db: UserDBResponse) -> Self {
        Self {
            username: db.username,
            name: db.name,
            avatar_url: db.avatar_url,
        }
    }
}

/// Entry in the user listing, which only exposes usernames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryResponse {
    pub username: String,
}

impl From<UserDBResponse> for UserSummaryResponse {
    fn from(db: UserDBResponse) -> Self {
        Self { username: db.username }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersEnvelope {
    pub users: Vec<UserSummaryResponse>,
}
